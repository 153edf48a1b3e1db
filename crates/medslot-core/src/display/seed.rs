//! Display for seeding results.

use std::fmt;

use crate::models::SeedSummary;

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Database seeded")?;
        writeln!(f)?;
        writeln!(f, "- {} admin created", self.admins)?;
        writeln!(
            f,
            "- {} doctors created ({} verified)",
            self.doctors, self.verified_doctors
        )?;
        writeln!(f, "- {} patients created", self.patients)?;
        writeln!(f, "- {} availability slots created", self.availabilities)?;
        writeln!(f, "- {} appointments created", self.appointments)?;
        writeln!(
            f,
            "- {} credit transactions created",
            self.credit_transactions
        )?;
        writeln!(f, "- {} payouts created", self.payouts)
    }
}
