//! Layout tables for every segment kind and encoding.
//!
//! Fields are listed in ascending offset order. The two descriptor words
//! share offset 0: the block descriptor word is only interpreted under block
//! framing, where it takes the place of the record descriptor word.

use super::{FieldSpec, FieldType, Options, Presence};

/// Length of every segment in the character encoding.
pub(super) const CHARACTER_LENGTH: usize = 426;
/// Length of every segment in the packed encoding.
pub(super) const PACKED_LENGTH: usize = 366;

pub(super) type Table = &'static [(&'static str, FieldSpec)];

/// Build a table from `"Name": start, length, Type [| OPTION], Presence;`
/// rows.
macro_rules! table {
    (@options) => { Options::NONE };
    (@options $option:ident) => { Options::$option };
    ($($name:literal: $start:literal, $length:literal, $ty:ident $(| $option:ident)?, $presence:ident;)*) => {
        &[$((
            $name,
            FieldSpec::new(
                $start,
                $length,
                FieldType::$ty,
                table!(@options $($option)?),
                Presence::$presence,
            ),
        ),)*]
    };
}

pub(super) static BASE_CHARACTER: Table = table! {
    "BlockDescriptorWord":           0, 4, Numeric | OMITTED, Applicable;
    "RecordDescriptorWord":          0, 4, Numeric, Required;
    "ProcessingIndicator":           4, 1, Numeric, Nullable;
    "TimeStamp":                     5, 14, Timestamp, Nullable;
    "Reserved1":                     19, 1, Alphanumeric | ZERO_FILL, Nullable;
    "IdentificationNumber":          20, 20, Alphanumeric, Required;
    "CycleIdentifier":               40, 2, Alphanumeric, Applicable;
    "ConsumerAccountNumber":         42, 30, Alphanumeric, Required;
    "PortfolioType":                 72, 1, Alphanumeric, Required;
    "AccountType":                   73, 2, Alphanumeric, Required;
    "DateOpened":                    75, 8, Date, Required;
    "CreditLimit":                   83, 9, Numeric | ZERO_FILL, Applicable;
    "HighestCredit":                 92, 9, Numeric, Required;
    "TermsDuration":                 101, 3, Alphanumeric, Required;
    "TermsFrequency":                104, 1, Alphanumeric, Applicable;
    "ScheduledMonthlyPaymentAmount": 105, 9, Numeric, Applicable;
    "ActualPaymentAmount":           114, 9, Numeric, Applicable;
    "AccountStatus":                 123, 2, Alphanumeric, Required;
    "PaymentRating":                 125, 1, Alphanumeric, Applicable;
    "PaymentHistoryProfile":         126, 24, Alphanumeric, Required;
    "SpecialComment":                150, 2, Alphanumeric, Applicable;
    "ComplianceConditionCode":       152, 2, Alphanumeric, Applicable;
    "CurrentBalance":                154, 9, Numeric, Required;
    "AmountPastDue":                 163, 9, Numeric, Applicable;
    "OriginalChargeOffAmount":       172, 9, Numeric, Applicable;
    "DateAccountInformation":        181, 8, Date, Required;
    "DateFirstDelinquency":          189, 8, Date, Applicable;
    "DateClosed":                    197, 8, Date | ZERO_FILL, Applicable;
    "DateLastPayment":               205, 8, Date, Applicable;
    "InterestTypeIndicator":         213, 1, Alphanumeric, Nullable;
    "Reserved2":                     214, 17, Alphanumeric, Nullable;
    "Surname":                       231, 25, Alphanumeric, Required;
    "FirstName":                     256, 20, Alphanumeric, Required;
    "MiddleName":                    276, 20, Alphanumeric, Applicable;
    "GenerationCode":                296, 1, Alphanumeric, Applicable;
    "SocialSecurityNumber":          297, 9, Numeric, Required;
    "DateBirth":                     306, 8, Date, Required;
    "TelephoneNumber":               314, 10, Numeric, Nullable;
    "ECOACode":                      324, 1, Alphanumeric, Required;
    "ConsumerInformationIndicator":  325, 2, Alphanumeric, Applicable;
    "CountryCode":                   327, 2, Alphanumeric, Nullable;
    "FirstLineAddress":              329, 32, Alphanumeric, Required;
    "SecondLineAddress":             361, 32, Alphanumeric, Applicable;
    "City":                          393, 20, Alphanumeric, Required;
    "State":                         413, 2, Alphanumeric, Required;
    "ZipCode":                       415, 9, Alphanumeric, Required;
    "AddressIndicator":              424, 1, Alphanumeric, Nullable;
    "ResidenceCode":                 425, 1, Alphanumeric, Nullable;
};

pub(super) static BASE_PACKED: Table = table! {
    "BlockDescriptorWord":           0, 4, Descriptor | OMITTED, Applicable;
    "RecordDescriptorWord":          0, 4, Descriptor, Required;
    "ProcessingIndicator":           4, 1, Numeric, Nullable;
    "TimeStamp":                     5, 8, PackedTimestamp, Nullable;
    "Reserved1":                     13, 1, Alphanumeric | ZERO_FILL, Nullable;
    "IdentificationNumber":          14, 20, Alphanumeric, Required;
    "CycleIdentifier":               34, 2, Alphanumeric, Applicable;
    "ConsumerAccountNumber":         36, 30, Alphanumeric, Required;
    "PortfolioType":                 66, 1, Alphanumeric, Required;
    "AccountType":                   67, 2, Alphanumeric, Required;
    "DateOpened":                    69, 5, PackedDate, Required;
    "CreditLimit":                   74, 5, PackedNumber | ZERO_FILL, Applicable;
    "HighestCredit":                 79, 5, PackedNumber, Required;
    "TermsDuration":                 84, 3, Alphanumeric, Required;
    "TermsFrequency":                87, 1, Alphanumeric, Applicable;
    "ScheduledMonthlyPaymentAmount": 88, 5, PackedNumber, Applicable;
    "ActualPaymentAmount":           93, 5, PackedNumber, Applicable;
    "AccountStatus":                 98, 2, Alphanumeric, Required;
    "PaymentRating":                 100, 1, Alphanumeric, Applicable;
    "PaymentHistoryProfile":         101, 24, Alphanumeric, Required;
    "SpecialComment":                125, 2, Alphanumeric, Applicable;
    "ComplianceConditionCode":       127, 2, Alphanumeric, Applicable;
    "CurrentBalance":                129, 5, PackedNumber, Required;
    "AmountPastDue":                 134, 5, PackedNumber, Applicable;
    "OriginalChargeOffAmount":       139, 5, PackedNumber, Applicable;
    "DateAccountInformation":        144, 5, PackedDate, Required;
    "DateFirstDelinquency":          149, 5, PackedDate, Applicable;
    "DateClosed":                    154, 5, PackedDate | ZERO_FILL, Applicable;
    "DateLastPayment":               159, 5, PackedDate, Applicable;
    "InterestTypeIndicator":         164, 1, Alphanumeric, Nullable;
    "Reserved2":                     165, 17, Alphanumeric, Nullable;
    "Surname":                       182, 25, Alphanumeric, Required;
    "FirstName":                     207, 20, Alphanumeric, Required;
    "MiddleName":                    227, 20, Alphanumeric, Applicable;
    "GenerationCode":                247, 1, Alphanumeric, Applicable;
    "SocialSecurityNumber":          248, 5, PackedNumber, Required;
    "DateBirth":                     253, 5, PackedDate, Required;
    "TelephoneNumber":               258, 6, PackedNumber, Nullable;
    "ECOACode":                      264, 1, Alphanumeric, Required;
    "ConsumerInformationIndicator":  265, 2, Alphanumeric, Applicable;
    "CountryCode":                   267, 2, Alphanumeric, Nullable;
    "FirstLineAddress":              269, 32, Alphanumeric, Required;
    "SecondLineAddress":             301, 32, Alphanumeric, Applicable;
    "City":                          333, 20, Alphanumeric, Required;
    "State":                         353, 2, Alphanumeric, Required;
    "ZipCode":                       355, 9, Alphanumeric, Required;
    "AddressIndicator":              364, 1, Alphanumeric, Nullable;
    "ResidenceCode":                 365, 1, Alphanumeric, Nullable;
};

pub(super) static HEADER_CHARACTER: Table = table! {
    "BlockDescriptorWord":         0, 4, Numeric | OMITTED, Applicable;
    "RecordDescriptorWord":        0, 4, Numeric, Required;
    "RecordIdentifier":            4, 6, Alphanumeric, Required;
    "CycleIdentifier":             10, 2, Alphanumeric, Applicable;
    "InnovisProgramIdentifier":    12, 10, Alphanumeric, Applicable;
    "EquifaxProgramIdentifier":    22, 10, Alphanumeric, Applicable;
    "ExperianProgramIdentifier":   32, 5, Alphanumeric, Applicable;
    "TransUnionProgramIdentifier": 37, 10, Alphanumeric, Applicable;
    "ActivityDate":                47, 8, Numeric, Required;
    "DateCreated":                 55, 8, Numeric, Required;
    "ProgramDate":                 63, 8, Numeric, Nullable;
    "ProgramRevisionDate":         71, 8, Numeric, Nullable;
    "ReporterName":                79, 40, Alphanumeric, Required;
    "ReporterAddress":             119, 96, Alphanumeric, Required;
    "ReporterTelephoneNumber":     215, 10, Numeric, Nullable;
    "SoftwareVendorName":          225, 40, Alphanumeric, Applicable;
    "SoftwareVersionNumber":       265, 5, Alphanumeric, Applicable;
    "PRBCProgramIdentifier":       270, 10, Alphanumeric, Applicable;
    "Reserved":                    280, 146, Alphanumeric, Nullable;
};

pub(super) static HEADER_PACKED: Table = table! {
    "BlockDescriptorWord":         0, 4, Descriptor | OMITTED, Applicable;
    "RecordDescriptorWord":        0, 4, Descriptor, Required;
    "RecordIdentifier":            4, 6, Alphanumeric, Required;
    "CycleIdentifier":             10, 2, Alphanumeric, Applicable;
    "InnovisProgramIdentifier":    12, 10, Alphanumeric, Applicable;
    "EquifaxProgramIdentifier":    22, 10, Alphanumeric, Applicable;
    "ExperianProgramIdentifier":   32, 5, Alphanumeric, Applicable;
    "TransUnionProgramIdentifier": 37, 10, Alphanumeric, Applicable;
    "ActivityDate":                47, 8, Numeric, Required;
    "DateCreated":                 55, 8, Numeric, Required;
    "ProgramDate":                 63, 8, Numeric, Nullable;
    "ProgramRevisionDate":         71, 8, Numeric, Nullable;
    "ReporterName":                79, 40, Alphanumeric, Required;
    "ReporterAddress":             119, 96, Alphanumeric, Required;
    "ReporterTelephoneNumber":     215, 10, Numeric, Nullable;
    "SoftwareVendorName":          225, 40, Alphanumeric, Applicable;
    "SoftwareVersionNumber":       265, 5, Alphanumeric, Applicable;
    "PRBCProgramIdentifier":       270, 10, Alphanumeric, Applicable;
    "Reserved":                    280, 86, Alphanumeric, Nullable;
};

pub(super) static TRAILER_CHARACTER: Table = table! {
    "RecordDescriptorWord":             0, 4, Numeric, Required;
    "RecordIdentifier":                 4, 7, Alphanumeric, Required;
    "TotalBaseRecords":                 11, 9, Numeric, Required;
    "Reserved1":                        20, 9, Alphanumeric, Nullable;
    "TotalStatusCodeDF":                29, 9, Numeric, Nullable;
    "TotalConsumerSegmentsJ1":          38, 9, Numeric, Applicable;
    "TotalConsumerSegmentsJ2":          47, 9, Numeric, Applicable;
    "BlockCount":                       56, 9, Numeric, Required;
    "TotalStatusCodeDA":                65, 9, Numeric, Nullable;
    "TotalStatusCode05":                74, 9, Numeric, Nullable;
    "TotalStatusCode11":                83, 9, Numeric, Nullable;
    "TotalStatusCode13":                92, 9, Numeric, Nullable;
    "TotalStatusCode61":                101, 9, Numeric, Nullable;
    "TotalStatusCode62":                110, 9, Numeric, Nullable;
    "TotalStatusCode63":                119, 9, Numeric, Nullable;
    "TotalStatusCode64":                128, 9, Numeric, Nullable;
    "TotalStatusCode65":                137, 9, Numeric, Nullable;
    "TotalStatusCode71":                146, 9, Numeric, Nullable;
    "TotalStatusCode78":                155, 9, Numeric, Nullable;
    "TotalStatusCode80":                164, 9, Numeric, Nullable;
    "TotalStatusCode82":                173, 9, Numeric, Nullable;
    "TotalStatusCode83":                182, 9, Numeric, Nullable;
    "TotalStatusCode84":                191, 9, Numeric, Nullable;
    "TotalStatusCode88":                200, 9, Numeric, Nullable;
    "TotalStatusCode89":                209, 9, Numeric, Nullable;
    "TotalStatusCode93":                218, 9, Numeric, Nullable;
    "TotalStatusCode94":                227, 9, Numeric, Nullable;
    "TotalStatusCode95":                236, 9, Numeric, Nullable;
    "TotalStatusCode96":                245, 9, Numeric, Nullable;
    "TotalStatusCode97":                254, 9, Numeric, Nullable;
    "TotalECOACodeZ":                   263, 9, Numeric, Nullable;
    "TotalEmploymentSegments":          272, 9, Numeric, Nullable;
    "TotalOriginalCreditorSegments":    281, 9, Numeric, Nullable;
    "TotalPurchasedToSegments":         290, 9, Numeric, Nullable;
    "TotalMortgageInformationSegments": 299, 9, Numeric, Nullable;
    "TotalPaymentInformationSegments":  308, 9, Numeric, Nullable;
    "TotalChangeSegments":              317, 9, Numeric, Nullable;
    "TotalSocialNumbersAllSegments":    326, 9, Numeric, Nullable;
    "TotalSocialNumbersBaseSegments":   335, 9, Numeric, Nullable;
    "TotalSocialNumbersJ1Segments":     344, 9, Numeric, Nullable;
    "TotalSocialNumbersJ2Segments":     353, 9, Numeric, Nullable;
    "TotalDatesBirthAllSegments":       362, 9, Numeric, Nullable;
    "TotalDatesBirthBaseSegments":      371, 9, Numeric, Nullable;
    "TotalDatesBirthJ1Segments":        380, 9, Numeric, Nullable;
    "TotalDatesBirthJ2Segments":        389, 9, Numeric, Nullable;
    "TotalTelephoneNumbersAllSegments": 398, 9, Numeric, Nullable;
    "Reserved2":                        407, 19, Numeric, Nullable;
};

pub(super) static TRAILER_PACKED: Table = table! {
    "RecordDescriptorWord":             0, 4, Descriptor, Required;
    "RecordIdentifier":                 4, 7, Alphanumeric, Required;
    "TotalBaseRecords":                 11, 5, PackedNumber, Required;
    "Reserved1":                        16, 5, Alphanumeric, Nullable;
    "TotalStatusCodeDF":                21, 5, PackedNumber, Nullable;
    "TotalConsumerSegmentsJ1":          26, 5, PackedNumber, Applicable;
    "TotalConsumerSegmentsJ2":          31, 5, PackedNumber, Applicable;
    "BlockCount":                       36, 5, PackedNumber, Required;
    "TotalStatusCodeDA":                41, 5, PackedNumber, Nullable;
    "TotalStatusCode05":                46, 5, PackedNumber, Nullable;
    "TotalStatusCode11":                51, 5, PackedNumber, Nullable;
    "TotalStatusCode13":                56, 5, PackedNumber, Nullable;
    "TotalStatusCode61":                61, 5, PackedNumber, Nullable;
    "TotalStatusCode62":                66, 5, PackedNumber, Nullable;
    "TotalStatusCode63":                71, 5, PackedNumber, Nullable;
    "TotalStatusCode64":                76, 5, PackedNumber, Nullable;
    "TotalStatusCode65":                81, 5, PackedNumber, Nullable;
    "TotalStatusCode71":                86, 5, PackedNumber, Nullable;
    "TotalStatusCode78":                91, 5, PackedNumber, Nullable;
    "TotalStatusCode80":                96, 5, PackedNumber, Nullable;
    "TotalStatusCode82":                101, 5, PackedNumber, Nullable;
    "TotalStatusCode83":                106, 5, PackedNumber, Nullable;
    "TotalStatusCode84":                111, 5, PackedNumber, Nullable;
    "TotalStatusCode88":                116, 5, PackedNumber, Nullable;
    "TotalStatusCode89":                121, 5, PackedNumber, Nullable;
    "TotalStatusCode93":                126, 5, PackedNumber, Nullable;
    "TotalStatusCode94":                131, 5, PackedNumber, Nullable;
    "TotalStatusCode95":                136, 5, PackedNumber, Nullable;
    "TotalStatusCode96":                141, 5, PackedNumber, Nullable;
    "TotalStatusCode97":                146, 5, PackedNumber, Nullable;
    "TotalECOACodeZ":                   151, 5, PackedNumber, Nullable;
    "TotalEmploymentSegments":          156, 5, PackedNumber, Nullable;
    "TotalOriginalCreditorSegments":    161, 5, PackedNumber, Nullable;
    "TotalPurchasedToSegments":         166, 5, PackedNumber, Nullable;
    "TotalMortgageInformationSegments": 171, 5, PackedNumber, Nullable;
    "TotalPaymentInformationSegments":  176, 5, PackedNumber, Nullable;
    "TotalChangeSegments":              181, 5, PackedNumber, Nullable;
    "TotalSocialNumbersAllSegments":    186, 5, PackedNumber, Nullable;
    "TotalSocialNumbersBaseSegments":   191, 5, PackedNumber, Nullable;
    "TotalSocialNumbersJ1Segments":     196, 5, PackedNumber, Nullable;
    "TotalSocialNumbersJ2Segments":     201, 5, PackedNumber, Nullable;
    "TotalDatesBirthAllSegments":       206, 5, PackedNumber, Nullable;
    "TotalDatesBirthBaseSegments":      211, 5, PackedNumber, Nullable;
    "TotalDatesBirthJ1Segments":        216, 5, PackedNumber, Nullable;
    "TotalDatesBirthJ2Segments":        221, 5, PackedNumber, Nullable;
    "TotalTelephoneNumbersAllSegments": 226, 5, PackedNumber, Nullable;
    "Reserved2":                        231, 135, Alphanumeric, Nullable;
};
