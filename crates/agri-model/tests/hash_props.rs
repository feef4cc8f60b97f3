use agri_model::{LedgerHash, ModelError, ProductStatus, QualityGrade, TransactionKind};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_any_sixteen_bytes_parse(bytes in prop::array::uniform16(any::<u8>())) {
        let raw = format!("0x{}", hex::encode_upper(bytes));
        let hash = LedgerHash::parse(&raw).unwrap();
        prop_assert_eq!(hash.as_str(), raw.as_str());
        prop_assert_eq!(hash.short().len(), 11);
        prop_assert!(hash.short().ends_with("..."));
    }

    #[test]
    fn prop_wrong_length_rejected(bytes in prop::collection::vec(any::<u8>(), 0..40)) {
        prop_assume!(bytes.len() != LedgerHash::BYTES);
        let raw = format!("0x{}", hex::encode(&bytes));
        let is_invalid_hash = matches!(LedgerHash::parse(&raw), Err(ModelError::InvalidHash { .. }));
        prop_assert!(is_invalid_hash);
    }
}

#[test]
fn missing_prefix_rejected() {
    let err = LedgerHash::parse("1a2b3c4d5e6f7890abcdef1234567890").unwrap_err();
    assert!(err.to_string().contains("prefix"));
}

#[test]
fn enum_wire_names_parse_back() {
    for status in ProductStatus::ALL {
        assert_eq!(status.as_str().parse::<ProductStatus>().unwrap(), status);
    }
    for grade in QualityGrade::ALL {
        assert_eq!(grade.to_string().parse::<QualityGrade>().unwrap(), grade);
    }
    for kind in TransactionKind::ALL {
        assert_eq!(kind.as_str().parse::<TransactionKind>().unwrap(), kind);
    }
    assert!("Harvested".parse::<ProductStatus>().is_err());
}
