//! Typed models of the built-in segments.
//!
//! Each model holds one `Option` per field of its segment, other than the
//! reserved fields, and converts to and from a [`Record`](crate::record::Record)
//! of either encoding. Descriptor words are only populated under the framing
//! that interprets them.
//!
//! _Requires Cargo feature `derive`._

use alloc::string::String;

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    record::{FromRecord, ToRecord},
    schema::SegmentKind,
    segment::Segment,
};

/// The header record opening a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRecord, ToRecord)]
pub struct HeaderRecord {
    /// Block length, under block framing.
    #[field("BlockDescriptorWord")]
    pub block_descriptor_word: Option<u32>,
    /// Segment length, under record framing.
    #[field("RecordDescriptorWord")]
    pub record_descriptor_word: Option<u32>,
    #[field("RecordIdentifier")]
    pub record_identifier: Option<String>,
    #[field("CycleIdentifier")]
    pub cycle_identifier: Option<String>,
    #[field("InnovisProgramIdentifier")]
    pub innovis_program_identifier: Option<String>,
    #[field("EquifaxProgramIdentifier")]
    pub equifax_program_identifier: Option<String>,
    #[field("ExperianProgramIdentifier")]
    pub experian_program_identifier: Option<String>,
    #[field("TransUnionProgramIdentifier")]
    pub trans_union_program_identifier: Option<String>,
    /// `YYYYMMDD` of the reporting period, kept as digits.
    #[field("ActivityDate")]
    pub activity_date: Option<u64>,
    #[field("DateCreated")]
    pub date_created: Option<u64>,
    #[field("ProgramDate")]
    pub program_date: Option<u64>,
    #[field("ProgramRevisionDate")]
    pub program_revision_date: Option<u64>,
    #[field("ReporterName")]
    pub reporter_name: Option<String>,
    #[field("ReporterAddress")]
    pub reporter_address: Option<String>,
    #[field("ReporterTelephoneNumber")]
    pub reporter_telephone_number: Option<u64>,
    #[field("SoftwareVendorName")]
    pub software_vendor_name: Option<String>,
    #[field("SoftwareVersionNumber")]
    pub software_version_number: Option<String>,
    #[field("PRBCProgramIdentifier")]
    pub prbc_program_identifier: Option<String>,
}

impl Segment for HeaderRecord {
    const KIND: SegmentKind = SegmentKind::Header;
}

/// The base segment of an account (a tradeline), with the primary consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRecord, ToRecord)]
pub struct BaseSegment {
    /// Block length, under block framing.
    #[field("BlockDescriptorWord")]
    pub block_descriptor_word: Option<u32>,
    /// Segment length, under record framing.
    #[field("RecordDescriptorWord")]
    pub record_descriptor_word: Option<u32>,
    #[field("ProcessingIndicator")]
    pub processing_indicator: Option<u64>,
    #[field("TimeStamp")]
    pub time_stamp: Option<NaiveDateTime>,
    #[field("IdentificationNumber")]
    pub identification_number: Option<String>,
    #[field("CycleIdentifier")]
    pub cycle_identifier: Option<String>,
    #[field("ConsumerAccountNumber")]
    pub consumer_account_number: Option<String>,
    #[field("PortfolioType")]
    pub portfolio_type: Option<String>,
    #[field("AccountType")]
    pub account_type: Option<String>,
    #[field("DateOpened")]
    pub date_opened: Option<NaiveDate>,
    /// Whole dollars.
    #[field("CreditLimit")]
    pub credit_limit: Option<u64>,
    #[field("HighestCredit")]
    pub highest_credit: Option<u64>,
    #[field("TermsDuration")]
    pub terms_duration: Option<String>,
    #[field("TermsFrequency")]
    pub terms_frequency: Option<String>,
    #[field("ScheduledMonthlyPaymentAmount")]
    pub scheduled_monthly_payment_amount: Option<u64>,
    #[field("ActualPaymentAmount")]
    pub actual_payment_amount: Option<u64>,
    #[field("AccountStatus")]
    pub account_status: Option<String>,
    #[field("PaymentRating")]
    pub payment_rating: Option<String>,
    /// One status character per month, most recent first.
    #[field("PaymentHistoryProfile")]
    pub payment_history_profile: Option<String>,
    #[field("SpecialComment")]
    pub special_comment: Option<String>,
    #[field("ComplianceConditionCode")]
    pub compliance_condition_code: Option<String>,
    #[field("CurrentBalance")]
    pub current_balance: Option<u64>,
    #[field("AmountPastDue")]
    pub amount_past_due: Option<u64>,
    #[field("OriginalChargeOffAmount")]
    pub original_charge_off_amount: Option<u64>,
    #[field("DateAccountInformation")]
    pub date_account_information: Option<NaiveDate>,
    #[field("DateFirstDelinquency")]
    pub date_first_delinquency: Option<NaiveDate>,
    #[field("DateClosed")]
    pub date_closed: Option<NaiveDate>,
    #[field("DateLastPayment")]
    pub date_last_payment: Option<NaiveDate>,
    #[field("InterestTypeIndicator")]
    pub interest_type_indicator: Option<String>,
    #[field("Surname")]
    pub surname: Option<String>,
    #[field("FirstName")]
    pub first_name: Option<String>,
    #[field("MiddleName")]
    pub middle_name: Option<String>,
    #[field("GenerationCode")]
    pub generation_code: Option<String>,
    #[field("SocialSecurityNumber")]
    pub social_security_number: Option<u64>,
    #[field("DateBirth")]
    pub date_birth: Option<NaiveDate>,
    #[field("TelephoneNumber")]
    pub telephone_number: Option<u64>,
    /// Equal Credit Opportunity Act designator.
    #[field("ECOACode")]
    pub ecoa_code: Option<String>,
    #[field("ConsumerInformationIndicator")]
    pub consumer_information_indicator: Option<String>,
    #[field("CountryCode")]
    pub country_code: Option<String>,
    #[field("FirstLineAddress")]
    pub first_line_address: Option<String>,
    #[field("SecondLineAddress")]
    pub second_line_address: Option<String>,
    #[field("City")]
    pub city: Option<String>,
    #[field("State")]
    pub state: Option<String>,
    #[field("ZipCode")]
    pub zip_code: Option<String>,
    #[field("AddressIndicator")]
    pub address_indicator: Option<String>,
    #[field("ResidenceCode")]
    pub residence_code: Option<String>,
}

impl Segment for BaseSegment {
    const KIND: SegmentKind = SegmentKind::Base;
}

/// The trailer record closing a file, with totals of the records reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRecord, ToRecord)]
pub struct TrailerRecord {
    /// Segment length, under record framing.
    #[field("RecordDescriptorWord")]
    pub record_descriptor_word: Option<u32>,
    #[field("RecordIdentifier")]
    pub record_identifier: Option<String>,
    #[field("TotalBaseRecords")]
    pub total_base_records: Option<u64>,
    #[field("TotalStatusCodeDF")]
    pub total_status_code_df: Option<u64>,
    #[field("TotalConsumerSegmentsJ1")]
    pub total_consumer_segments_j1: Option<u64>,
    #[field("TotalConsumerSegmentsJ2")]
    pub total_consumer_segments_j2: Option<u64>,
    /// Blocks in the file.
    #[field("BlockCount")]
    pub block_count: Option<u64>,
    #[field("TotalStatusCodeDA")]
    pub total_status_code_da: Option<u64>,
    #[field("TotalStatusCode05")]
    pub total_status_code_05: Option<u64>,
    #[field("TotalStatusCode11")]
    pub total_status_code_11: Option<u64>,
    #[field("TotalStatusCode13")]
    pub total_status_code_13: Option<u64>,
    #[field("TotalStatusCode61")]
    pub total_status_code_61: Option<u64>,
    #[field("TotalStatusCode62")]
    pub total_status_code_62: Option<u64>,
    #[field("TotalStatusCode63")]
    pub total_status_code_63: Option<u64>,
    #[field("TotalStatusCode64")]
    pub total_status_code_64: Option<u64>,
    #[field("TotalStatusCode65")]
    pub total_status_code_65: Option<u64>,
    #[field("TotalStatusCode71")]
    pub total_status_code_71: Option<u64>,
    #[field("TotalStatusCode78")]
    pub total_status_code_78: Option<u64>,
    #[field("TotalStatusCode80")]
    pub total_status_code_80: Option<u64>,
    #[field("TotalStatusCode82")]
    pub total_status_code_82: Option<u64>,
    #[field("TotalStatusCode83")]
    pub total_status_code_83: Option<u64>,
    #[field("TotalStatusCode84")]
    pub total_status_code_84: Option<u64>,
    #[field("TotalStatusCode88")]
    pub total_status_code_88: Option<u64>,
    #[field("TotalStatusCode89")]
    pub total_status_code_89: Option<u64>,
    #[field("TotalStatusCode93")]
    pub total_status_code_93: Option<u64>,
    #[field("TotalStatusCode94")]
    pub total_status_code_94: Option<u64>,
    #[field("TotalStatusCode95")]
    pub total_status_code_95: Option<u64>,
    #[field("TotalStatusCode96")]
    pub total_status_code_96: Option<u64>,
    #[field("TotalStatusCode97")]
    pub total_status_code_97: Option<u64>,
    #[field("TotalECOACodeZ")]
    pub total_ecoa_code_z: Option<u64>,
    #[field("TotalEmploymentSegments")]
    pub total_employment_segments: Option<u64>,
    #[field("TotalOriginalCreditorSegments")]
    pub total_original_creditor_segments: Option<u64>,
    #[field("TotalPurchasedToSegments")]
    pub total_purchased_to_segments: Option<u64>,
    #[field("TotalMortgageInformationSegments")]
    pub total_mortgage_information_segments: Option<u64>,
    #[field("TotalPaymentInformationSegments")]
    pub total_payment_information_segments: Option<u64>,
    #[field("TotalChangeSegments")]
    pub total_change_segments: Option<u64>,
    #[field("TotalSocialNumbersAllSegments")]
    pub total_social_numbers_all_segments: Option<u64>,
    #[field("TotalSocialNumbersBaseSegments")]
    pub total_social_numbers_base_segments: Option<u64>,
    #[field("TotalSocialNumbersJ1Segments")]
    pub total_social_numbers_j1_segments: Option<u64>,
    #[field("TotalSocialNumbersJ2Segments")]
    pub total_social_numbers_j2_segments: Option<u64>,
    #[field("TotalDatesBirthAllSegments")]
    pub total_dates_birth_all_segments: Option<u64>,
    #[field("TotalDatesBirthBaseSegments")]
    pub total_dates_birth_base_segments: Option<u64>,
    #[field("TotalDatesBirthJ1Segments")]
    pub total_dates_birth_j1_segments: Option<u64>,
    #[field("TotalDatesBirthJ2Segments")]
    pub total_dates_birth_j2_segments: Option<u64>,
    #[field("TotalTelephoneNumbersAllSegments")]
    pub total_telephone_numbers_all_segments: Option<u64>,
}

impl Segment for TrailerRecord {
    const KIND: SegmentKind = SegmentKind::Trailer;
}
