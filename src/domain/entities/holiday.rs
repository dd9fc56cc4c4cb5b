use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayType {
    Federal,
    Company,
    Religious,
    Cultural,
    Regional,
}

impl Default for HolidayType {
    fn default() -> Self {
        HolidayType::Company
    }
}

impl std::fmt::Display for HolidayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidayType::Federal => write!(f, "federal"),
            HolidayType::Company => write!(f, "company"),
            HolidayType::Religious => write!(f, "religious"),
            HolidayType::Cultural => write!(f, "cultural"),
            HolidayType::Regional => write!(f, "regional"),
        }
    }
}

impl std::str::FromStr for HolidayType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "federal" => Ok(HolidayType::Federal),
            "company" => Ok(HolidayType::Company),
            "religious" => Ok(HolidayType::Religious),
            "cultural" => Ok(HolidayType::Cultural),
            "regional" => Ok(HolidayType::Regional),
            _ => Err(format!("Invalid holiday type: {}", s)),
        }
    }
}

/// Tenant holiday calendar entry.
///
/// Only entries that are active, observed and flagged to auto-apply reduce
/// forecast capacity; the rest are informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub id: Uuid,
    pub tenant_id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub holiday_type: HolidayType,
    pub is_recurring: bool,
    pub description: Option<String>,
    pub is_active: bool,
    pub is_observed: bool,
    pub auto_apply_to_forecast: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Holiday {
    pub fn new(tenant_id: Uuid, name: String, date: NaiveDate, holiday_type: HolidayType) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4(),
            tenant_id,
            name,
            date,
            holiday_type,
            is_recurring: false,
            description: None,
            is_active: true,
            is_observed: true,
            auto_apply_to_forecast: true,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn counts_toward_forecast(&self) -> bool {
        self.is_active && self.is_observed && self.auto_apply_to_forecast
    }
}

/// Query filters for listing a tenant's holidays
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayFilter {
    pub year: Option<i32>,
    #[serde(rename = "type")]
    pub holiday_type: Option<HolidayType>,
    pub is_observed: Option<bool>,
}

impl HolidayFilter {
    pub fn matches(&self, holiday: &Holiday) -> bool {
        use chrono::Datelike;

        self.year.map_or(true, |year| holiday.date.year() == year)
            && self
                .holiday_type
                .map_or(true, |holiday_type| holiday.holiday_type == holiday_type)
            && self
                .is_observed
                .map_or(true, |observed| holiday.is_observed == observed)
    }
}

/// DTO for creating a holiday
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHolidayRequest {
    pub name: String,
    pub date: NaiveDate,
    #[serde(rename = "type", default)]
    pub holiday_type: HolidayType,
    #[serde(default)]
    pub is_recurring: bool,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub is_observed: Option<bool>,
    pub auto_apply_to_forecast: Option<bool>,
}

/// DTO for updating a holiday
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHolidayRequest {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub holiday_type: Option<HolidayType>,
    pub is_recurring: Option<bool>,
    /// `None` keeps the description, `Some(None)` (an explicit `null`) clears it
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    pub is_active: Option<bool>,
    pub is_observed: Option<bool>,
    pub auto_apply_to_forecast: Option<bool>,
}

/// Marks a field as present even when its value is `null`
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(date: NaiveDate) -> Holiday {
        Holiday::new(Uuid::new_v4(), "Test".to_string(), date, HolidayType::Federal)
    }

    #[test]
    fn test_new_holiday_counts_toward_forecast() {
        let h = holiday(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert!(h.counts_toward_forecast());
    }

    #[test]
    fn test_any_cleared_flag_excludes_from_forecast() {
        let base = holiday(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());

        let mut inactive = base.clone();
        inactive.is_active = false;
        let mut unobserved = base.clone();
        unobserved.is_observed = false;
        let mut informational = base;
        informational.auto_apply_to_forecast = false;

        assert!(!inactive.counts_toward_forecast());
        assert!(!unobserved.counts_toward_forecast());
        assert!(!informational.counts_toward_forecast());
    }

    #[test]
    fn test_holiday_type_parse() {
        assert_eq!("Federal".parse::<HolidayType>(), Ok(HolidayType::Federal));
        assert_eq!(HolidayType::Regional.to_string(), "regional");
        assert!("weekend".parse::<HolidayType>().is_err());
    }

    #[test]
    fn test_update_request_tells_null_from_absent_description() {
        let absent: UpdateHolidayRequest = serde_json::from_str(r#"{"name": "Day"}"#).unwrap();
        assert_eq!(absent.description, None);

        let cleared: UpdateHolidayRequest =
            serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(cleared.description, Some(None));

        let set: UpdateHolidayRequest =
            serde_json::from_str(r#"{"description": "Office closed"}"#).unwrap();
        assert_eq!(set.description, Some(Some("Office closed".to_string())));
    }

    #[test]
    fn test_filter_matches_year_and_observed() {
        let mut h = holiday(NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());
        h.is_observed = false;

        let filter = HolidayFilter {
            year: Some(2025),
            holiday_type: None,
            is_observed: Some(false),
        };
        assert!(filter.matches(&h));

        let other_year = HolidayFilter {
            year: Some(2024),
            ..Default::default()
        };
        assert!(!other_year.matches(&h));
    }
}
