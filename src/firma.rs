//! Company ("firma") records and their endpoints.
//!
//! The server owns these records and computes every figure in an
//! [`AnalysisResult`]; the client only moves them between the API and the
//! views. Numeric analysis fields are optional because the server omits
//! ratios it cannot compute for a period.

#[cfg(test)]
#[path = "firma_test.rs"]
mod firma_test;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::gateway::ApiClient;
use crate::transport::Upload;
use crate::types::{Extra, MessageResponse};

/// A company record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Firma {
    pub id: i64,
    /// Company name.
    pub adi: String,
    /// Tax identification number (VKN).
    pub vkn: String,
    /// Owning user, as reported by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body for `POST /firmalar`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewFirma {
    pub adi: String,
    pub vkn: String,
}

impl NewFirma {
    /// Trim both fields and require them to be non-empty.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidInput`] when either field is blank.
    pub fn new(adi: &str, vkn: &str) -> Result<Self, ApiError> {
        let (adi, vkn) = (adi.trim(), vkn.trim());
        if adi.is_empty() || vkn.is_empty() {
            return Err(ApiError::InvalidInput("Firma name and VKN are required.".to_owned()));
        }
        Ok(Self { adi: adi.to_owned(), vkn: vkn.to_owned() })
    }
}

/// One uploaded reporting period for a firma.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinancialPeriod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Period label, e.g. `2023` or `2023-Q4`.
    pub donem: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Server-computed analysis for one firma and period.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub firma_adi: Option<String>,
    #[serde(default)]
    pub analiz_donemi: Option<String>,
    #[serde(default)]
    pub hesaplanan_oranlar: Option<Ratios>,
    #[serde(default)]
    pub risk_skorlari: Option<RiskScores>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ratios {
    /// Current ratio.
    #[serde(default)]
    pub cari_oran: Option<f64>,
    /// Debt to equity.
    #[serde(default)]
    pub borc_bolu_ozkaynak_orani: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskScores {
    #[serde(default)]
    pub altman_z_skoru: Option<f64>,
    /// Server's reading of the Z score band.
    #[serde(default)]
    pub altman_z_skoru_yorum: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

fn firma_path(firma_id: i64) -> String {
    format!("/firmalar/{firma_id}")
}

impl ApiClient {
    /// `GET /firmalar`.
    ///
    /// # Errors
    ///
    /// Any gateway error.
    pub async fn list_firmalar(&self) -> Result<Vec<Firma>, ApiError> {
        self.get_json("/firmalar", &[]).await
    }

    /// `POST /firmalar`.
    ///
    /// # Errors
    ///
    /// Any gateway error; a duplicate VKN comes back as [`ApiError::Rejected`].
    pub async fn create_firma(&self, firma: &NewFirma) -> Result<Firma, ApiError> {
        self.post_json("/firmalar", firma).await
    }

    /// `DELETE /firmalar/{id}`.
    ///
    /// # Errors
    ///
    /// Any gateway error.
    pub async fn delete_firma(&self, firma_id: i64) -> Result<MessageResponse, ApiError> {
        self.delete_json(&firma_path(firma_id)).await
    }

    /// `GET /firmalar/{id}`.
    ///
    /// # Errors
    ///
    /// Any gateway error.
    pub async fn get_firma(&self, firma_id: i64) -> Result<Firma, ApiError> {
        self.get_json(&firma_path(firma_id), &[]).await
    }

    /// `GET /firmalar/{id}/finansal_veriler`. A `null` body is an empty list.
    ///
    /// # Errors
    ///
    /// Any gateway error.
    pub async fn list_financial_periods(&self, firma_id: i64) -> Result<Vec<FinancialPeriod>, ApiError> {
        let periods: Option<Vec<FinancialPeriod>> = self
            .get_json(&format!("{}/finansal_veriler", firma_path(firma_id)), &[])
            .await?;
        Ok(periods.unwrap_or_default())
    }

    /// `GET /firmalar/{id}/finansal_analiz?donem=...`.
    ///
    /// # Errors
    ///
    /// Any gateway error.
    pub async fn get_financial_analysis(&self, firma_id: i64, donem: &str) -> Result<AnalysisResult, ApiError> {
        self.get_json(&format!("{}/finansal_analiz", firma_path(firma_id)), &[("donem", donem)])
            .await
    }

    /// `POST /firmalar/{id}/upload_financials` with a CSV file.
    ///
    /// # Errors
    ///
    /// Any gateway error.
    pub async fn upload_financials_csv(&self, firma_id: i64, upload: Upload) -> Result<MessageResponse, ApiError> {
        self.post_multipart(&format!("{}/upload_financials", firma_path(firma_id)), upload)
            .await
    }

    /// `POST /firmalar/{id}/upload_edefter_xml` with an e-defter ledger.
    ///
    /// # Errors
    ///
    /// Any gateway error.
    pub async fn upload_edefter_xml(&self, firma_id: i64, upload: Upload) -> Result<MessageResponse, ApiError> {
        self.post_multipart(&format!("{}/upload_edefter_xml", firma_path(firma_id)), upload)
            .await
    }
}
