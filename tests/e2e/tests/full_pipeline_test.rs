//! Full end-to-end pipeline test
//!
//! Runs each captured merchant payload through the complete flow: decode
//! into the structured record, validate structurally, resolve the acquirer
//! reference, and build a GCash deep link — asserting the same values fall
//! out at every stage.

use anyhow::Result;

use qrlink_codec::{
    decode, generate_strategies, generate_with_validation, resolve_acquirer_reference, validate,
    DeepLinkBuilder, GCASH_BASE_URL,
};
use qrlink_e2e_tests::{all_fixtures, NEXA_EXPECTED, SOCMED_EXPECTED};
use qrlink_types::{DeepLinkOptions, PaymentType};

#[test]
fn every_fixture_decodes_to_its_expected_record() -> Result<()> {
    for expected in all_fixtures() {
        let record = decode(expected.payload)?;
        assert_eq!(record.merchant_name, expected.merchant_name);
        assert_eq!(record.merchant_city, expected.merchant_city);
        assert_eq!(record.merchant_category_code, expected.merchant_category_code);
        assert_eq!(record.amount, expected.amount);
        assert_eq!(record.bank_code, expected.bank_code);
        assert_eq!(record.shop_id, expected.shop_id);
        assert_eq!(record.checksum, expected.checksum);
        assert_eq!(record.country_code, "PH");
        assert_eq!(record.currency, "608");
        assert_eq!(record.raw_payload, expected.payload);
    }
    Ok(())
}

#[test]
fn every_fixture_passes_structural_validation() {
    for expected in all_fixtures() {
        let report = validate(expected.payload);
        assert!(
            report.valid,
            "{} unexpectedly invalid: {:?}",
            expected.merchant_name,
            report.messages()
        );
    }
}

#[test]
fn acquirer_resolution_matches_per_payload_expectations() -> Result<()> {
    for expected in all_fixtures() {
        let record = decode(expected.payload)?;
        let picked = resolve_acquirer_reference(
            &record.acquirer_candidate_a,
            &record.acquirer_candidate_b,
        );
        assert_eq!(picked, expected.acquirer_reference);
    }
    Ok(())
}

#[test]
fn decoded_records_build_complete_deep_links() -> Result<()> {
    for expected in all_fixtures() {
        let record = decode(expected.payload)?;
        let result = DeepLinkBuilder::new(&record).build();
        let link = result.deep_link.expect("deep link should be built");

        assert!(link.starts_with(GCASH_BASE_URL));
        assert!(link.contains(&format!("orderAmount={}", expected.amount)));
        assert!(link.contains(&format!("tfrbnkcode={}", expected.bank_code)));
        assert!(link.contains(&format!("shopId={}", expected.shop_id)));
        assert!(link.contains("sub=p2mpay"));
    }
    Ok(())
}

#[test]
fn validated_generation_round_trips_the_nexa_order_flow() -> Result<()> {
    let options = DeepLinkOptions {
        order_id: "ORDER-1695000000".to_string(),
        payment_type: Some(PaymentType::Dynamic),
        redirect_url: "https://myshop.com/payment/success".to_string(),
        notify_url: "https://myshop.com/api/gcash/webhook".to_string(),
        merchant_id: "217020000119199251998".to_string(),
        ..DeepLinkOptions::default()
    };

    let result = generate_with_validation(NEXA_EXPECTED.payload, options)?;
    assert!(result.success);

    let record = result.parsed_data.expect("parsed record should be echoed");
    assert_eq!(record.merchant_name, NEXA_EXPECTED.merchant_name);

    let link = result.deep_link.expect("deep link should be built");
    assert!(link.contains("merchantId=217020000119199251998"));
    assert!(link.contains("orderId=ORDER-1695000000"));
    // Dynamic payment type lands in the param3 route slot.
    assert!(link.contains("param3=99960005%7Eph.ppmi.p2m%7E%7E%7E010"));
    // The lettered sub-tag 03 reference wins over the numeric 05 one.
    assert!(link.contains("acqInfo=wWMBdH"));
    Ok(())
}

#[test]
fn validated_generation_refuses_a_truncated_payload() {
    let truncated = &SOCMED_EXPECTED.payload[..40];
    let err = generate_with_validation(truncated, DeepLinkOptions::default())
        .expect_err("truncated payload must be refused");
    assert!(err.to_string().contains("too short"));
}

#[test]
fn strategy_set_is_complete_for_each_fixture() -> Result<()> {
    for expected in all_fixtures() {
        let record = decode(expected.payload)?;
        let strategies = generate_strategies(&record);
        assert_eq!(strategies.len(), 3);
        for key in ["minimal", "dynamic", "with_callback"] {
            assert!(strategies.contains_key(key), "missing strategy {key}");
        }
        assert!(strategies["minimal"].contains("param3=99960005%7Eph.ppmi.p2m%7E%7E%7E000"));
        assert!(strategies["dynamic"].contains("param3=99960005%7Eph.ppmi.p2m%7E%7E%7E010"));
        assert!(strategies["with_callback"].contains("callbackUrl="));
    }
    Ok(())
}
