//! Output field identifiers for each claim record.
//!
//! Every export category has its own closed enumeration of BFD/RIF columns.
//! The configuration refers to fields by column name; [`CategoryField::from_name`]
//! turns that name into the category's variant and reports unknown names as
//! `None` instead of failing.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::Serialize;

use crate::category::ExportCategory;
use crate::error::ModelError;

/// A field enumeration tied to one export category.
pub trait CategoryField: Copy + Eq + Hash + fmt::Display + fmt::Debug + 'static {
    /// Category whose records contain these fields.
    const CATEGORY: ExportCategory;

    /// Look up a field by its exact column name.
    fn from_name(name: &str) -> Option<Self>;

    /// Column name as written by the record writer.
    fn as_str(&self) -> &'static str;

    /// Every field in record column order.
    fn all() -> &'static [Self];
}

macro_rules! export_fields {
    (
        $(#[$meta:meta])*
        $name:ident => $category:ident {
            $($variant:ident = $column:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub enum $name {
            $(
                #[serde(rename = $column)]
                $variant,
            )+
        }

        impl $name {
            const ALL: &'static [$name] = &[$($name::$variant),+];
        }

        impl CategoryField for $name {
            const CATEGORY: ExportCategory = ExportCategory::$category;

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($column => Some($name::$variant),)+
                    _ => None,
                }
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $column,)+
                }
            }

            fn all() -> &'static [Self] {
                Self::ALL
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(CategoryField::as_str(self))
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as CategoryField>::from_name(s).ok_or_else(|| ModelError::UnknownField {
                    category: ExportCategory::$category,
                    name: s.to_string(),
                })
            }
        }
    };
}

export_fields! {
    /// Columns of the beneficiary record.
    BeneficiaryField => Beneficiary {
        DmlInd = "DML_IND",
        BeneId = "BENE_ID",
        StateCode = "STATE_CODE",
        BeneCountyCd = "BENE_COUNTY_CD",
        BeneZipCd = "BENE_ZIP_CD",
        BeneBirthDt = "BENE_BIRTH_DT",
        BeneSexIdentCd = "BENE_SEX_IDENT_CD",
        BeneRaceCd = "BENE_RACE_CD",
        BeneEntlmtRsnOrig = "BENE_ENTLMT_RSN_ORIG",
        BeneEntlmtRsnCurr = "BENE_ENTLMT_RSN_CURR",
        BeneEsrdInd = "BENE_ESRD_IND",
        BeneMdcrStatusCd = "BENE_MDCR_STATUS_CD",
        BenePtaTrmntnCd = "BENE_PTA_TRMNTN_CD",
        BenePtbTrmntnCd = "BENE_PTB_TRMNTN_CD",
        BeneCrntHicNum = "BENE_CRNT_HIC_NUM",
        BeneSrnmName = "BENE_SRNM_NAME",
        BeneGvnName = "BENE_GVN_NAME",
        BeneMdlName = "BENE_MDL_NAME",
        MbiNum = "MBI_NUM",
        DeathDt = "DEATH_DT",
        RfrncYr = "RFRNC_YR",
        AMoCnt = "A_MO_CNT",
        BMoCnt = "B_MO_CNT",
        BuyinMoCnt = "BUYIN_MO_CNT",
        HmoMoCnt = "HMO_MO_CNT",
        RdsMoCnt = "RDS_MO_CNT",
        EnrlSrc = "ENRL_SRC",
        SampleGroup = "SAMPLE_GROUP",
        Efivepct = "EFIVEPCT",
        CrntBic = "CRNT_BIC",
        Age = "AGE",
        Covstart = "COVSTART",
        DualMoCnt = "DUAL_MO_CNT",
        VDodSw = "V_DOD_SW",
        RtiRaceCd = "RTI_RACE_CD",
        BeneLinkKey = "BENE_LINK_KEY",
    }
}

export_fields! {
    /// Columns of the beneficiary history record.
    BeneficiaryHistoryField => BeneficiaryHistory {
        DmlInd = "DML_IND",
        BeneId = "BENE_ID",
        StateCode = "STATE_CODE",
        BeneCountyCd = "BENE_COUNTY_CD",
        BeneZipCd = "BENE_ZIP_CD",
        BeneBirthDt = "BENE_BIRTH_DT",
        BeneSexIdentCd = "BENE_SEX_IDENT_CD",
        BeneRaceCd = "BENE_RACE_CD",
        BeneEntlmtRsnOrig = "BENE_ENTLMT_RSN_ORIG",
        BeneEntlmtRsnCurr = "BENE_ENTLMT_RSN_CURR",
        BeneEsrdInd = "BENE_ESRD_IND",
        BeneMdcrStatusCd = "BENE_MDCR_STATUS_CD",
        BenePtaTrmntnCd = "BENE_PTA_TRMNTN_CD",
        BenePtbTrmntnCd = "BENE_PTB_TRMNTN_CD",
        BeneCrntHicNum = "BENE_CRNT_HIC_NUM",
        BeneSrnmName = "BENE_SRNM_NAME",
        BeneGvnName = "BENE_GVN_NAME",
        BeneMdlName = "BENE_MDL_NAME",
        MbiNum = "MBI_NUM",
    }
}

export_fields! {
    /// Columns of the carrier (Part B professional) claim record.
    CarrierField => Carrier {
        DmlInd = "DML_IND",
        BeneId = "BENE_ID",
        ClmId = "CLM_ID",
        ClmGrpId = "CLM_GRP_ID",
        FinalAction = "FINAL_ACTION",
        NchNearLineRecIdentCd = "NCH_NEAR_LINE_REC_IDENT_CD",
        NchClmTypeCd = "NCH_CLM_TYPE_CD",
        ClmFromDt = "CLM_FROM_DT",
        ClmThruDt = "CLM_THRU_DT",
        NchWklyProcDt = "NCH_WKLY_PROC_DT",
        CarrClmEntryCd = "CARR_CLM_ENTRY_CD",
        ClmDispCd = "CLM_DISP_CD",
        CarrNum = "CARR_NUM",
        CarrClmPmtDnlCd = "CARR_CLM_PMT_DNL_CD",
        ClmPmtAmt = "CLM_PMT_AMT",
        CarrClmPrmryPyrPdAmt = "CARR_CLM_PRMRY_PYR_PD_AMT",
        RfrPhysnUpin = "RFR_PHYSN_UPIN",
        RfrPhysnNpi = "RFR_PHYSN_NPI",
        CarrClmPrvdrAsgnmtIndSw = "CARR_CLM_PRVDR_ASGNMT_IND_SW",
        NchClmPrvdrPmtAmt = "NCH_CLM_PRVDR_PMT_AMT",
        NchClmBenePmtAmt = "NCH_CLM_BENE_PMT_AMT",
        NchCarrClmSbmtdChrgAmt = "NCH_CARR_CLM_SBMTD_CHRG_AMT",
        NchCarrClmAlowdAmt = "NCH_CARR_CLM_ALOWD_AMT",
        CarrClmCashDdctblApldAmt = "CARR_CLM_CASH_DDCTBL_APLD_AMT",
        CarrClmHcpcsYrCd = "CARR_CLM_HCPCS_YR_CD",
        CarrClmRfrngPinNum = "CARR_CLM_RFRNG_PIN_NUM",
        PrncpalDgnsCd = "PRNCPAL_DGNS_CD",
        PrncpalDgnsVrsnCd = "PRNCPAL_DGNS_VRSN_CD",
        IcdDgnsCd1 = "ICD_DGNS_CD1",
        IcdDgnsVrsnCd1 = "ICD_DGNS_VRSN_CD1",
        ClmClnclTrilNum = "CLM_CLNCL_TRIL_NUM",
        LineNum = "LINE_NUM",
        CarrPrfrngPinNum = "CARR_PRFRNG_PIN_NUM",
        PrfPhysnUpin = "PRF_PHYSN_UPIN",
        PrfPhysnNpi = "PRF_PHYSN_NPI",
        OrgNpiNum = "ORG_NPI_NUM",
        CarrLinePrvdrTypeCd = "CARR_LINE_PRVDR_TYPE_CD",
        TaxNum = "TAX_NUM",
        PrvdrStateCd = "PRVDR_STATE_CD",
        PrvdrZip = "PRVDR_ZIP",
        PrvdrSpclty = "PRVDR_SPCLTY",
        PrtcptngIndCd = "PRTCPTNG_IND_CD",
        LineSrvcCnt = "LINE_SRVC_CNT",
        LineCmsTypeSrvcCd = "LINE_CMS_TYPE_SRVC_CD",
        LinePlaceOfSrvcCd = "LINE_PLACE_OF_SRVC_CD",
        CarrLinePrcngLcltyCd = "CARR_LINE_PRCNG_LCLTY_CD",
        Line1stExpnsDt = "LINE_1ST_EXPNS_DT",
        LineLastExpnsDt = "LINE_LAST_EXPNS_DT",
        HcpcsCd = "HCPCS_CD",
        LineNchPmtAmt = "LINE_NCH_PMT_AMT",
        LineBenePmtAmt = "LINE_BENE_PMT_AMT",
        LinePrvdrPmtAmt = "LINE_PRVDR_PMT_AMT",
        LineBenePtbDdctblAmt = "LINE_BENE_PTB_DDCTBL_AMT",
        LineCoinsrncAmt = "LINE_COINSRNC_AMT",
        LineSbmtdChrgAmt = "LINE_SBMTD_CHRG_AMT",
        LineAlowdChrgAmt = "LINE_ALOWD_CHRG_AMT",
        LinePrcsgIndCd = "LINE_PRCSG_IND_CD",
        LinePmt80100Cd = "LINE_PMT_80_100_CD",
        LineServiceDeductible = "LINE_SERVICE_DEDUCTIBLE",
        LineIcdDgnsCd = "LINE_ICD_DGNS_CD",
        LineIcdDgnsVrsnCd = "LINE_ICD_DGNS_VRSN_CD",
    }
}

export_fields! {
    /// Columns of the inpatient institutional claim record.
    InpatientField => Inpatient {
        DmlInd = "DML_IND",
        BeneId = "BENE_ID",
        ClmId = "CLM_ID",
        ClmGrpId = "CLM_GRP_ID",
        FinalAction = "FINAL_ACTION",
        NchNearLineRecIdentCd = "NCH_NEAR_LINE_REC_IDENT_CD",
        NchClmTypeCd = "NCH_CLM_TYPE_CD",
        ClmFromDt = "CLM_FROM_DT",
        ClmThruDt = "CLM_THRU_DT",
        NchWklyProcDt = "NCH_WKLY_PROC_DT",
        FiClmProcDt = "FI_CLM_PROC_DT",
        ClaimQueryCode = "CLAIM_QUERY_CODE",
        PrvdrNum = "PRVDR_NUM",
        ClmFacTypeCd = "CLM_FAC_TYPE_CD",
        ClmSrvcClsfctnTypeCd = "CLM_SRVC_CLSFCTN_TYPE_CD",
        ClmFreqCd = "CLM_FREQ_CD",
        FiNum = "FI_NUM",
        ClmMdcrNonPmtRsnCd = "CLM_MDCR_NON_PMT_RSN_CD",
        ClmPmtAmt = "CLM_PMT_AMT",
        NchPrmryPyrClmPdAmt = "NCH_PRMRY_PYR_CLM_PD_AMT",
        NchPrmryPyrCd = "NCH_PRMRY_PYR_CD",
        FiClmActnCd = "FI_CLM_ACTN_CD",
        PrvdrStateCd = "PRVDR_STATE_CD",
        OrgNpiNum = "ORG_NPI_NUM",
        AtPhysnUpin = "AT_PHYSN_UPIN",
        AtPhysnNpi = "AT_PHYSN_NPI",
        OpPhysnUpin = "OP_PHYSN_UPIN",
        OpPhysnNpi = "OP_PHYSN_NPI",
        OtPhysnUpin = "OT_PHYSN_UPIN",
        OtPhysnNpi = "OT_PHYSN_NPI",
        ClmMcoPdSw = "CLM_MCO_PD_SW",
        PtntDschrgStusCd = "PTNT_DSCHRG_STUS_CD",
        ClmPpsIndCd = "CLM_PPS_IND_CD",
        ClmTotChrgAmt = "CLM_TOT_CHRG_AMT",
        ClmAdmsnDt = "CLM_ADMSN_DT",
        ClmIpAdmsnTypeCd = "CLM_IP_ADMSN_TYPE_CD",
        ClmSrcIpAdmsnCd = "CLM_SRC_IP_ADMSN_CD",
        NchPtntStatusIndCd = "NCH_PTNT_STATUS_IND_CD",
        ClmPassThruPerDiemAmt = "CLM_PASS_THRU_PER_DIEM_AMT",
        NchBeneIpDdctblAmt = "NCH_BENE_IP_DDCTBL_AMT",
        NchBenePtaCoinsrncLbltyAm = "NCH_BENE_PTA_COINSRNC_LBLTY_AM",
        NchBeneBloodDdctblLbltyAm = "NCH_BENE_BLOOD_DDCTBL_LBLTY_AM",
        NchProfnlCmpntChrgAmt = "NCH_PROFNL_CMPNT_CHRG_AMT",
        NchIpNcvrdChrgAmt = "NCH_IP_NCVRD_CHRG_AMT",
        NchIpTotDdctnAmt = "NCH_IP_TOT_DDCTN_AMT",
        ClmTotPpsCptlAmt = "CLM_TOT_PPS_CPTL_AMT",
        ClmUtlztnDayCnt = "CLM_UTLZTN_DAY_CNT",
        BeneTotCoinsrncDaysCnt = "BENE_TOT_COINSRNC_DAYS_CNT",
        ClmNonUtlztnDaysCnt = "CLM_NON_UTLZTN_DAYS_CNT",
        NchBloodPntsFrnshdQty = "NCH_BLOOD_PNTS_FRNSHD_QTY",
        NchVrfdNcvrdStayFromDt = "NCH_VRFD_NCVRD_STAY_FROM_DT",
        NchVrfdNcvrdStayThruDt = "NCH_VRFD_NCVRD_STAY_THRU_DT",
        NchBeneDschrgDt = "NCH_BENE_DSCHRG_DT",
        ClmDrgCd = "CLM_DRG_CD",
        AdmtgDgnsCd = "ADMTG_DGNS_CD",
        PrncpalDgnsCd = "PRNCPAL_DGNS_CD",
        IcdDgnsCd1 = "ICD_DGNS_CD1",
        ClmPoaInd1 = "CLM_POA_IND_SW1",
        IcdPrcdrCd1 = "ICD_PRCDR_CD1",
        PrcdrDt1 = "PRCDR_DT1",
        ClmLineNum = "CLM_LINE_NUM",
        RevCntr = "REV_CNTR",
        HcpcsCd = "HCPCS_CD",
        RevCntrUnitCnt = "REV_CNTR_UNIT_CNT",
        RevCntrRateAmt = "REV_CNTR_RATE_AMT",
        RevCntrTotChrgAmt = "REV_CNTR_TOT_CHRG_AMT",
        RevCntrNcvrdChrgAmt = "REV_CNTR_NCVRD_CHRG_AMT",
        RevCntrDdctblCoinsrncCd = "REV_CNTR_DDCTBL_COINSRNC_CD",
        RevCntrNdcQty = "REV_CNTR_NDC_QTY",
        RevCntrNdcQtyQlfrCd = "REV_CNTR_NDC_QTY_QLFR_CD",
        RndrngPhysnUpin = "RNDRNG_PHYSN_UPIN",
        RndrngPhysnNpi = "RNDRNG_PHYSN_NPI",
    }
}

export_fields! {
    /// Columns of the outpatient institutional claim record.
    OutpatientField => Outpatient {
        DmlInd = "DML_IND",
        BeneId = "BENE_ID",
        ClmId = "CLM_ID",
        ClmGrpId = "CLM_GRP_ID",
        FinalAction = "FINAL_ACTION",
        NchNearLineRecIdentCd = "NCH_NEAR_LINE_REC_IDENT_CD",
        NchClmTypeCd = "NCH_CLM_TYPE_CD",
        ClmFromDt = "CLM_FROM_DT",
        ClmThruDt = "CLM_THRU_DT",
        NchWklyProcDt = "NCH_WKLY_PROC_DT",
        FiClmProcDt = "FI_CLM_PROC_DT",
        ClaimQueryCode = "CLAIM_QUERY_CODE",
        PrvdrNum = "PRVDR_NUM",
        ClmFacTypeCd = "CLM_FAC_TYPE_CD",
        ClmSrvcClsfctnTypeCd = "CLM_SRVC_CLSFCTN_TYPE_CD",
        ClmFreqCd = "CLM_FREQ_CD",
        FiNum = "FI_NUM",
        ClmMdcrNonPmtRsnCd = "CLM_MDCR_NON_PMT_RSN_CD",
        ClmPmtAmt = "CLM_PMT_AMT",
        NchPrmryPyrClmPdAmt = "NCH_PRMRY_PYR_CLM_PD_AMT",
        NchPrmryPyrCd = "NCH_PRMRY_PYR_CD",
        PrvdrStateCd = "PRVDR_STATE_CD",
        OrgNpiNum = "ORG_NPI_NUM",
        AtPhysnUpin = "AT_PHYSN_UPIN",
        AtPhysnNpi = "AT_PHYSN_NPI",
        OpPhysnUpin = "OP_PHYSN_UPIN",
        OpPhysnNpi = "OP_PHYSN_NPI",
        OtPhysnUpin = "OT_PHYSN_UPIN",
        OtPhysnNpi = "OT_PHYSN_NPI",
        ClmMcoPdSw = "CLM_MCO_PD_SW",
        PtntDschrgStusCd = "PTNT_DSCHRG_STUS_CD",
        ClmTotChrgAmt = "CLM_TOT_CHRG_AMT",
        NchBeneBloodDdctblLbltyAm = "NCH_BENE_BLOOD_DDCTBL_LBLTY_AM",
        NchProfnlCmpntChrgAmt = "NCH_PROFNL_CMPNT_CHRG_AMT",
        PrncpalDgnsCd = "PRNCPAL_DGNS_CD",
        IcdDgnsCd1 = "ICD_DGNS_CD1",
        IcdPrcdrCd1 = "ICD_PRCDR_CD1",
        PrcdrDt1 = "PRCDR_DT1",
        NchBenePtbDdctblAmt = "NCH_BENE_PTB_DDCTBL_AMT",
        NchBenePtbCoinsrncAmt = "NCH_BENE_PTB_COINSRNC_AMT",
        ClmOpPrvdrPmtAmt = "CLM_OP_PRVDR_PMT_AMT",
        ClmOpBenePmtAmt = "CLM_OP_BENE_PMT_AMT",
        FstDgnsECd = "FST_DGNS_E_CD",
        RsnVisitCd1 = "RSN_VISIT_CD1",
        ClmLineNum = "CLM_LINE_NUM",
        RevCntr = "REV_CNTR",
        RevCntrDt = "REV_CNTR_DT",
        Rev1stAnsiCd = "REV_CNTR_1ST_ANSI_CD",
        RevCntrApcHippsCd = "REV_CNTR_APC_HIPPS_CD",
        HcpcsCd = "HCPCS_CD",
        RevCntrPmtMthdIndCd = "REV_CNTR_PMT_MTHD_IND_CD",
        RevCntrDscntIndCd = "REV_CNTR_DSCNT_IND_CD",
        RevCntrPacktIndCd = "REV_CNTR_PACKG_IND_CD",
        RevCntrOtafPmtCd = "REV_CNTR_OTAF_PMT_CD",
        RevCntrIdeNdcUpcNum = "REV_CNTR_IDE_NDC_UPC_NUM",
        RevCntrUnitCnt = "REV_CNTR_UNIT_CNT",
        RevCntrRateAmt = "REV_CNTR_RATE_AMT",
        RevCntrBloodDdctblAmt = "REV_CNTR_BLOOD_DDCTBL_AMT",
        RevCntrCashDdctblAmt = "REV_CNTR_CASH_DDCTBL_AMT",
        RevCntrCoinsrncWgeAdjstdC = "REV_CNTR_COINSRNC_WGE_ADJSTD_C",
        RevCntrRdcdCoinsrncAmt = "REV_CNTR_RDCD_COINSRNC_AMT",
        RevCntrPrvdrPmtAmt = "REV_CNTR_PRVDR_PMT_AMT",
        RevCntrBenePmtAmt = "REV_CNTR_BENE_PMT_AMT",
        RevCntrPtntRspnsbltyPmt = "REV_CNTR_PTNT_RSPNSBLTY_PMT",
        RevCntrPmtAmtAmt = "REV_CNTR_PMT_AMT_AMT",
        RevCntrTotChrgAmt = "REV_CNTR_TOT_CHRG_AMT",
        RevCntrNcvrdChrgAmt = "REV_CNTR_NCVRD_CHRG_AMT",
        RevCntrStusIndCd = "REV_CNTR_STUS_IND_CD",
        RevCntrNdcQty = "REV_CNTR_NDC_QTY",
        RevCntrNdcQtyQlfrCd = "REV_CNTR_NDC_QTY_QLFR_CD",
        RndrngPhysnUpin = "RNDRNG_PHYSN_UPIN",
        RndrngPhysnNpi = "RNDRNG_PHYSN_NPI",
    }
}

export_fields! {
    /// Columns of the Part D prescription drug event record.
    PrescriptionField => Prescription {
        DmlInd = "DML_IND",
        PdeId = "PDE_ID",
        ClmGrpId = "CLM_GRP_ID",
        FinalAction = "FINAL_ACTION",
        BeneId = "BENE_ID",
        SrvcDt = "SRVC_DT",
        PdDt = "PD_DT",
        SrvcPrvdrIdQlfyrCd = "SRVC_PRVDR_ID_QLFYR_CD",
        SrvcPrvdrId = "SRVC_PRVDR_ID",
        PrscrbrIdQlfyrCd = "PRSCRBR_ID_QLFYR_CD",
        PrscrbrId = "PRSCRBR_ID",
        RxSrvcRfrncNum = "RX_SRVC_RFRNC_NUM",
        ProdSrvcId = "PROD_SRVC_ID",
        PlanCntrctRecId = "PLAN_CNTRCT_REC_ID",
        PlanPbpRecNum = "PLAN_PBP_REC_NUM",
        CmpndCd = "CMPND_CD",
        DawProdSlctnCd = "DAW_PROD_SLCTN_CD",
        QtyDspnsdNum = "QTY_DSPNSD_NUM",
        DaysSuplyNum = "DAYS_SUPLY_NUM",
        FillNum = "FILL_NUM",
        DspnsngStusCd = "DSPNSNG_STUS_CD",
        DrugCvrgStusCd = "DRUG_CVRG_STUS_CD",
        AdjstmtDltnCd = "ADJSTMT_DLTN_CD",
        NstdFrmtCd = "NSTD_FRMT_CD",
        PrcngExcptnCd = "PRCNG_EXCPTN_CD",
        CtstrphcCvrgCd = "CTSTRPHC_CVRG_CD",
        GdcBlwOoptAmt = "GDC_BLW_OOPT_AMT",
        GdcAbvOoptAmt = "GDC_ABV_OOPT_AMT",
        PtntPayAmt = "PTNT_PAY_AMT",
        OthrTroopAmt = "OTHR_TROOP_AMT",
        LicsAmt = "LICS_AMT",
        PlroAmt = "PLRO_AMT",
        CvrdDPlanPdAmt = "CVRD_D_PLAN_PD_AMT",
        NcvrdPlanPdAmt = "NCVRD_PLAN_PD_AMT",
        TotRxCstAmt = "TOT_RX_CST_AMT",
        RxOrgnCd = "RX_ORGN_CD",
        RptdGapDscntNum = "RPTD_GAP_DSCNT_NUM",
        BrndGnrcCd = "BRND_GNRC_CD",
        PhrmcySrvcTypeCd = "PHRMCY_SRVC_TYPE_CD",
        PtntRsdncCd = "PTNT_RSDNC_CD",
        SubmsnClrCd = "SUBMSN_CLR_CD",
    }
}

/// A field identifier of any category.
///
/// Use this when the category is only known at runtime; each variant wraps
/// the category's own enumeration so the writer can match on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ExportField {
    Beneficiary(BeneficiaryField),
    BeneficiaryHistory(BeneficiaryHistoryField),
    Carrier(CarrierField),
    Inpatient(InpatientField),
    Outpatient(OutpatientField),
    Prescription(PrescriptionField),
}

impl ExportField {
    /// Resolve a column name within the given category.
    pub fn lookup(category: ExportCategory, name: &str) -> Option<Self> {
        match category {
            ExportCategory::Beneficiary => {
                BeneficiaryField::from_name(name).map(ExportField::Beneficiary)
            }
            ExportCategory::BeneficiaryHistory => {
                BeneficiaryHistoryField::from_name(name).map(ExportField::BeneficiaryHistory)
            }
            ExportCategory::Carrier => CarrierField::from_name(name).map(ExportField::Carrier),
            ExportCategory::Inpatient => {
                InpatientField::from_name(name).map(ExportField::Inpatient)
            }
            ExportCategory::Outpatient => {
                OutpatientField::from_name(name).map(ExportField::Outpatient)
            }
            ExportCategory::Prescription => {
                PrescriptionField::from_name(name).map(ExportField::Prescription)
            }
        }
    }

    pub fn category(&self) -> ExportCategory {
        match self {
            ExportField::Beneficiary(_) => ExportCategory::Beneficiary,
            ExportField::BeneficiaryHistory(_) => ExportCategory::BeneficiaryHistory,
            ExportField::Carrier(_) => ExportCategory::Carrier,
            ExportField::Inpatient(_) => ExportCategory::Inpatient,
            ExportField::Outpatient(_) => ExportCategory::Outpatient,
            ExportField::Prescription(_) => ExportCategory::Prescription,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportField::Beneficiary(field) => field.as_str(),
            ExportField::BeneficiaryHistory(field) => field.as_str(),
            ExportField::Carrier(field) => field.as_str(),
            ExportField::Inpatient(field) => field.as_str(),
            ExportField::Outpatient(field) => field.as_str(),
            ExportField::Prescription(field) => field.as_str(),
        }
    }
}

impl fmt::Display for ExportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(
            CarrierField::from_name("CLM_FROM_DT"),
            Some(CarrierField::ClmFromDt)
        );
        assert_eq!(CarrierField::from_name("clm_from_dt"), None);
        assert_eq!(CarrierField::from_name("PDE_ID"), None);
    }

    #[test]
    fn test_names_round_trip_for_every_field() {
        fn check<F: CategoryField>() {
            for field in F::all() {
                assert_eq!(F::from_name(field.as_str()), Some(*field));
            }
        }
        check::<BeneficiaryField>();
        check::<BeneficiaryHistoryField>();
        check::<CarrierField>();
        check::<InpatientField>();
        check::<OutpatientField>();
        check::<PrescriptionField>();
    }

    #[test]
    fn test_export_field_lookup_respects_category() {
        let field = ExportField::lookup(ExportCategory::Prescription, "PDE_ID").unwrap();
        assert_eq!(field, ExportField::Prescription(PrescriptionField::PdeId));
        assert_eq!(field.category(), ExportCategory::Prescription);
        assert!(ExportField::lookup(ExportCategory::Beneficiary, "PDE_ID").is_none());
    }

    #[test]
    fn test_from_str_reports_category() {
        let err = "NOPE".parse::<InpatientField>().unwrap_err();
        assert_eq!(err.to_string(), "unknown INPATIENT field: NOPE");
    }
}
