//! Domain types and models

pub mod assessment;
pub mod events;
pub mod evidence;
pub mod payloads;
pub mod token;

pub use assessment::{AssessmentOutcome, Reason, RiskAssessment, SignupAssessment, TransactionAssessment};
pub use events::{
    CustomProperties, EventRequest, Feedback, FeedbackIdentifiers, FeedbackType, Identifiers,
    Login, Payment, Signup,
};
pub use evidence::{Evidence, EvidenceError};
pub use payloads::{
    Address, AddressType, BankAccountInfo, CardInfo, Coordinates, Coupon, CouponKind, Location,
    PaymentMethod, PaymentMethodType, PaymentValue, PersonId, PixKey, StructuredAddress,
    TransactionAddress,
};
pub use token::{Token, TokenResponse};
