//! Captured merchant-presented payloads from live PH acquirers, plus the
//! field values a correct decode must recover from each.

/// Static-amount code from a Makati marketing agency (Starpay acquirer).
/// Tag 28 carries the merchant account; tag 88 is an unassigned trailer
/// the decoder must skip over.
pub const SOCMED_PAYLOAD: &str = "00020101021228530011ph.ppmi.p2m0111SRCPPHM2XXX0312MRCHNT-4H3TZ05030005204519953036085406100.005802PH5925SOCMED DIGITAL MARKETING 6010MakatiCity62650010ph.starpay0315SOCMED DIGITAL 0509OR#1Z1CSC0708TodayPay0803***88290012ph.ppmi.qrph0109OR#1Z1CSC63040275";

/// Dynamic code from an online shop on the PayMaya rails. Its tag 62
/// carries a lettered reference in sub-tag 03 and a numeric one in
/// sub-tag 05, exercising the acquirer-resolution precedence.
pub const NEXA_PAYLOAD: &str = "00020101021228790011ph.ppmi.p2m0111PAEYPHM2XXX0324VkHUE2Fz8Ee2YxnTVPX34TZs0410030300288605030105204739953036085406100.005802PH5916NEXA ONLINE SHOP6013General Trias62430012ph.ppmi.qrph0306wWMBdH05062110000803***88440012ph.ppmi.qrph0124VkHUE2Fz8Ee2YxnTVPX34TZs63041C3C";

/// Expected decode of one fixture payload.
pub struct ExpectedDecode {
    pub payload: &'static str,
    pub merchant_name: &'static str,
    pub merchant_city: &'static str,
    pub merchant_category_code: &'static str,
    pub amount: &'static str,
    pub bank_code: &'static str,
    pub shop_id: &'static str,
    pub checksum: &'static str,
    /// What the acquirer-reference resolver must pick for this payload.
    pub acquirer_reference: &'static str,
}

pub const SOCMED_EXPECTED: ExpectedDecode = ExpectedDecode {
    payload: SOCMED_PAYLOAD,
    merchant_name: "SOCMED DIGITAL MARKETING",
    merchant_city: "MakatiCity",
    merchant_category_code: "5199",
    amount: "100.00",
    bank_code: "SRCPPHM2XXX",
    shop_id: "MRCHNT-4H3TZ",
    checksum: "0275",
    acquirer_reference: "OR#1Z1CSC",
};

pub const NEXA_EXPECTED: ExpectedDecode = ExpectedDecode {
    payload: NEXA_PAYLOAD,
    merchant_name: "NEXA ONLINE SHOP",
    merchant_city: "General Trias",
    merchant_category_code: "7399",
    amount: "100.00",
    bank_code: "PAEYPHM2XXX",
    shop_id: "VkHUE2Fz8Ee2YxnTVPX34TZs",
    checksum: "1C3C",
    acquirer_reference: "wWMBdH",
};

/// Both fixtures, for table-driven tests.
pub fn all_fixtures() -> [&'static ExpectedDecode; 2] {
    [&SOCMED_EXPECTED, &NEXA_EXPECTED]
}
