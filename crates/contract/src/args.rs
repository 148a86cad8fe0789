//! String argument parsing
//!
//! Arguments arrive as strings from the host. Booleans accept the same
//! spellings as the host's chaincode runtime (`1`, `t`, `T`, `TRUE`, `true`,
//! `True` and their negatives).

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{ContractError, ContractResult};

pub fn parse_bool(name: &'static str, value: &str) -> ContractResult<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(ContractError::InvalidArgument {
            name,
            reason: format!("{:?} is not a boolean", other),
        }),
    }
}

pub fn parse_int(name: &'static str, value: &str) -> ContractResult<i64> {
    value.trim().parse().map_err(|e| ContractError::InvalidArgument {
        name,
        reason: format!("{:?}: {}", value, e),
    })
}

pub fn parse_decimal(name: &'static str, value: &str) -> ContractResult<Decimal> {
    Decimal::from_str(value.trim()).map_err(|e| ContractError::InvalidArgument {
        name,
        reason: format!("{:?}: {}", value, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("kycVerified", "true").unwrap());
        assert!(parse_bool("kycVerified", "T").unwrap());
        assert!(!parse_bool("kycVerified", "0").unwrap());
        assert!(parse_bool("kycVerified", "yes").is_err());
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("riskScore", "71").unwrap(), 71);
        assert_eq!(parse_int("riskScore", "-3").unwrap(), -3);

        let err = parse_int("riskScore", "7.5").unwrap_err();
        assert!(matches!(err, ContractError::InvalidArgument { name: "riskScore", .. }));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("amount", "1000.25").unwrap(), dec!(1000.25));
        assert!(parse_decimal("amount", "ten").is_err());
    }
}
