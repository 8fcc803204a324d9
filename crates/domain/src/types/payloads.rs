//! Nested payloads carried by event inputs
//!
//! These structures are forwarded to the service as-is; the client only
//! inspects location coordinates and the location timestamp. Optional fields
//! are omitted from the wire when unset.

use serde::{Deserialize, Serialize};

/// Device location reported with a login or payment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// RFC 3339 date-time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collected_at: Option<String>,
}

impl Location {
    /// Location with both coordinates set.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude: Some(latitude), longitude: Some(longitude), collected_at: None }
    }

    /// When the location was collected, as RFC 3339.
    #[must_use]
    pub fn collected_at(mut self, timestamp: impl Into<String>) -> Self {
        self.collected_at = Some(timestamp.into());
        self
    }
}

/// Latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Address broken into its components.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StructuredAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borough: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Address attached to a signup. Flattened into the signup body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Address {
    pub coordinates: Option<Coordinates>,
    pub structured: Option<StructuredAddress>,
    pub address_line: Option<String>,
}

/// Role of a payment address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressType {
    #[default]
    Shipping,
    Billing,
    Home,
}

/// Typed address attached to a payment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionAddress {
    #[serde(rename = "type")]
    pub address_type: AddressType,
    #[serde(rename = "address_coordinates", skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_address: Option<StructuredAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
}

/// Amount charged and its currency.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaymentValue {
    pub amount: f64,
    pub currency: String,
}

/// How a coupon value is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouponKind {
    #[default]
    PercentOff,
    FixedValue,
}

/// Discount applied to a payment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Coupon {
    #[serde(rename = "type")]
    pub kind: CouponKind,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Wire name of a payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodType {
    AccountBalance,
    ApplePay,
    Bancolombia,
    BoletoBancario,
    Cash,
    #[default]
    CreditCard,
    DebitCard,
    GooglePay,
    MealVoucher,
    NuPay,
    Paypal,
    Pix,
}

/// Card details. Never the full number.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CardInfo {
    pub bin: String,
    pub last_four_digits: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_month: Option<String>,
}

/// One method used to pay.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaymentMethod {
    #[serde(rename = "type")]
    pub method_type: PaymentMethodType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(rename = "credit_card_info", skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CardInfo>,
    #[serde(rename = "debit_card_info", skip_serializing_if = "Option::is_none")]
    pub debit_card: Option<CardInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
}

/// Government or business identifier of a person (`cpf`, `cnpj`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersonId {
    #[serde(rename = "type")]
    pub id_type: String,
    pub value: String,
}

impl PersonId {
    /// Identifier of the given type.
    pub fn new(id_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self { id_type: id_type.into(), value: value.into() }
    }
}

/// Pix key of a bank account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixKey {
    #[serde(rename = "type")]
    pub key_type: String,
    pub value: String,
}

/// Debtor or creditor bank account of a payment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BankAccountInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder_tax_id: Option<PersonId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ispb_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_check_digit: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pix_keys: Vec<PixKey>,
}
