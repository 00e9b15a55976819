//! Product descriptions: the operating system and licence bundled with a reservation.
//!
//! The set is closed. Combinations that do not exist as a product (for example
//! "Windows without SQL Server Web") are rejected exactly like unknown names.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum ProductDescription {
    #[serde(rename = "Linux/UNIX")]
    LinuxUnix,
    #[serde(rename = "SUSE Linux")]
    SuseLinux,
    #[serde(rename = "Red Hat Enterprise Linux")]
    RedHatEnterpriseLinux,
    #[serde(rename = "Windows")]
    Windows,
    #[serde(rename = "Windows BYOL")]
    WindowsByol,
    #[serde(rename = "Windows with SQL Server Standard")]
    WindowsWithSqlServerStandard,
    #[serde(rename = "Windows with SQL Server Web")]
    WindowsWithSqlServerWeb,
    #[serde(rename = "Windows with SQL Server Enterprise")]
    WindowsWithSqlServerEnterprise,
    #[serde(rename = "Linux with SQL Server Standard")]
    LinuxWithSqlServerStandard,
    #[serde(rename = "Linux with SQL Server Web")]
    LinuxWithSqlServerWeb,
    #[serde(rename = "Linux with SQL Server Enterprise")]
    LinuxWithSqlServerEnterprise,
}

impl ProductDescription {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductDescription::LinuxUnix => "Linux/UNIX",
            ProductDescription::SuseLinux => "SUSE Linux",
            ProductDescription::RedHatEnterpriseLinux => "Red Hat Enterprise Linux",
            ProductDescription::Windows => "Windows",
            ProductDescription::WindowsByol => "Windows BYOL",
            ProductDescription::WindowsWithSqlServerStandard => "Windows with SQL Server Standard",
            ProductDescription::WindowsWithSqlServerWeb => "Windows with SQL Server Web",
            ProductDescription::WindowsWithSqlServerEnterprise => {
                "Windows with SQL Server Enterprise"
            }
            ProductDescription::LinuxWithSqlServerStandard => "Linux with SQL Server Standard",
            ProductDescription::LinuxWithSqlServerWeb => "Linux with SQL Server Web",
            ProductDescription::LinuxWithSqlServerEnterprise => "Linux with SQL Server Enterprise",
        }
    }

    /// Factor applied to the Linux on-demand rate to account for licensing.
    pub fn license_multiplier(&self) -> f64 {
        match self {
            ProductDescription::LinuxUnix => 1.0,
            ProductDescription::SuseLinux => 1.35,
            ProductDescription::RedHatEnterpriseLinux => 1.6,
            ProductDescription::Windows => 1.45,
            // BYOL carries no Microsoft licence charge.
            ProductDescription::WindowsByol => 1.0,
            ProductDescription::WindowsWithSqlServerWeb => 1.8,
            ProductDescription::WindowsWithSqlServerStandard => 2.9,
            ProductDescription::WindowsWithSqlServerEnterprise => 5.2,
            ProductDescription::LinuxWithSqlServerWeb => 1.35,
            ProductDescription::LinuxWithSqlServerStandard => 2.45,
            ProductDescription::LinuxWithSqlServerEnterprise => 4.75,
        }
    }

    pub fn all_names() -> Vec<&'static str> {
        ProductDescription::iter().map(|p| p.as_str()).collect()
    }
}

impl std::fmt::Display for ProductDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProductDescription {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductDescription::iter()
            .find(|product| product.as_str() == s)
            .ok_or(())
    }
}
