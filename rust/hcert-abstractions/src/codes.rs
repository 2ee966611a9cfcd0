// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Well-known value sets used by vaccination, test and recovery entries.

use crate::coded::{Coded, WellKnownCode};

macro_rules! well_known_codes {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($code:literal, $display:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl WellKnownCode for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            fn display_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $display),+
                }
            }
        }
    };
}

well_known_codes! {
    /// Disease or agent targeted (`tg`).
    DiseaseAgentCode {
        Covid19 => ("840539006", "COVID-19"),
    }
}

well_known_codes! {
    /// Vaccine or prophylaxis (`vp`).
    VaccineProphylaxisCode {
        SarsCov2MrnaVaccine => ("1119349007", "SARS-CoV-2 mRNA vaccine"),
        SarsCov2AntigenVaccine => ("1119305005", "SARS-CoV-2 antigen vaccine"),
        Covid19Vaccines => ("J07BX03", "covid-19 vaccines"),
    }
}

well_known_codes! {
    /// Vaccine medicinal product (`mp`).
    MedicinalProductCode {
        Comirnaty => ("EU/1/20/1528", "Comirnaty"),
        Moderna => ("EU/1/20/1507", "COVID-19 Vaccine Moderna"),
        Vaxzevria => ("EU/1/21/1529", "Vaxzevria"),
        Janssen => ("EU/1/20/1525", "COVID-19 Vaccine Janssen"),
        CvnCov => ("CVnCoV", "CVnCoV"),
        SputnikV => ("Sputnik-V", "Sputnik-V"),
        Convidecia => ("Convidecia", "Convidecia"),
        EpiVacCorona => ("EpiVacCorona", "EpiVacCorona"),
        BbibpCorV => ("BBIBP-CorV", "BBIBP-CorV"),
        InactivatedVeroCell => ("Inactivated-SARS-CoV-2-Vero-Cell", "Inactivated SARS-CoV-2 (Vero Cell)"),
        CoronaVac => ("CoronaVac", "CoronaVac"),
        Covaxin => ("Covaxin", "Covaxin (also known as BBV152 A, B, C)"),
    }
}

well_known_codes! {
    /// Vaccine marketing authorization holder or manufacturer (`ma`).
    MarketingAuthorizationHolderCode {
        AstraZeneca => ("ORG-100001699", "AstraZeneca AB"),
        BioNTech => ("ORG-100030215", "Biontech Manufacturing GmbH"),
        Janssen => ("ORG-100001417", "Janssen-Cilag International"),
        Moderna => ("ORG-100031184", "Moderna Biotech Spain S.L."),
        CureVac => ("ORG-100006270", "Curevac AG"),
        CanSino => ("ORG-100013793", "CanSino Biologics"),
        SinopharmBeijing => ("ORG-100020693", "China Sinopharm International Corp. - Beijing location"),
        SinopharmWuhan => ("ORG-100010771", "Sinopharm Weiqida Europe Pharmaceutical s.r.o. - Prague location"),
        SinopharmZhijun => ("ORG-100024420", "Sinopharm Zhijun (Shenzhen) Pharmaceutical Co. Ltd. - Shenzhen location"),
        Novavax => ("ORG-100032020", "Novavax CZ AS"),
        Gamaleya => ("Gamaleya-Research-Institute", "Gamaleya Research Institute"),
        Vector => ("Vector-Institute", "Vector Institute"),
        Sinovac => ("Sinovac-Biotech", "Sinovac Biotech"),
        Bharat => ("Bharat-Biotech", "Bharat Biotech"),
    }
}

well_known_codes! {
    /// Type of test (`tt`).
    TestTypeCode {
        Pcr => ("LP6464-4", "Nucleic acid amplification with probe detection"),
        Rapid => ("LP217198-3", "Rapid immunoassay"),
    }
}

well_known_codes! {
    /// Test result (`tr`).
    TestResultCode {
        Negative => ("260415000", "Not detected"),
        Positive => ("260373001", "Detected"),
    }
}

pub type DiseaseAgent = Coded<DiseaseAgentCode>;
pub type VaccineProphylaxis = Coded<VaccineProphylaxisCode>;
pub type MedicinalProduct = Coded<MedicinalProductCode>;
pub type MarketingAuthorizationHolder = Coded<MarketingAuthorizationHolderCode>;
pub type TestType = Coded<TestTypeCode>;
pub type TestResult = Coded<TestResultCode>;
