use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct SizeCreateRequest {
    #[validate(length(min = 1, max = 20))]
    pub name: String,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub description: String,
    #[validate(range(exclusive_min = 0.0))]
    pub min_width: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub min_length: f64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SizeUpdateRequest {
    #[validate(length(min = 1, max = 20))]
    pub name: Option<String>,
    #[validate(length(max = 100))]
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0))]
    pub min_width: Option<f64>,
    #[validate(range(exclusive_min = 0.0))]
    pub min_length: Option<f64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LocationCreateRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 500))]
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1, max = 100))]
    pub address: String,
    #[validate(length(min = 1, max = 50))]
    pub city: String,
    #[validate(length(min = 1, max = 3))]
    pub state: String,
    #[validate(length(min = 1, max = 10))]
    pub zip_code: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LocationUpdateRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub address: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub city: Option<String>,
    #[validate(length(min = 1, max = 3))]
    pub state: Option<String>,
    #[validate(length(min = 1, max = 10))]
    pub zip_code: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SpotCreateRequest {
    pub location_id: i64,
    pub size_id: i64,
    #[validate(range(exclusive_min = 0.0))]
    pub actual_width: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub actual_length: f64,
    /// Hourly rate.
    #[validate(custom(function = "common::validation::amount"))]
    pub price: Decimal,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SpotUpdateRequest {
    pub location_id: Option<i64>,
    pub size_id: Option<i64>,
    #[validate(range(exclusive_min = 0.0))]
    pub actual_width: Option<f64>,
    #[validate(range(exclusive_min = 0.0))]
    pub actual_length: Option<f64>,
    #[validate(custom(function = "common::validation::amount"))]
    pub price: Option<Decimal>,
    #[validate(length(max = 100))]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn spot_body() -> Value {
        json!({
            "location_id": 1,
            "size_id": 1,
            "actual_width": 8.5,
            "actual_length": 18.0,
            "price": "5.00",
            "notes": "by the gate",
        })
    }

    #[test]
    fn fractional_dimensions_are_kept() {
        let req: SpotCreateRequest = serde_json::from_value(spot_body()).unwrap();
        assert_eq!(req.actual_width, 8.5);
        assert_eq!(req.actual_length, 18.0);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn whole_number_dimensions_are_read_as_feet() {
        let mut body = spot_body();
        body["actual_width"] = json!(9);
        let req: SpotCreateRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.actual_width, 9.0);
    }

    #[test]
    fn zero_width_fails_validation() {
        let mut body = spot_body();
        body["actual_width"] = json!(0.0);
        let req: SpotCreateRequest = serde_json::from_value(body).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("actual_width"));
    }

    #[test]
    fn negative_price_fails_validation() {
        let mut body = spot_body();
        body["price"] = json!("-1.00");
        let req: SpotCreateRequest = serde_json::from_value(body).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn size_update_accepts_a_fractional_minimum() {
        let req: SizeUpdateRequest =
            serde_json::from_value(json!({ "min_width": 7.5 })).unwrap();
        assert_eq!(req.min_width, Some(7.5));
        assert!(req.validate().is_ok());

        let req: SizeUpdateRequest =
            serde_json::from_value(json!({ "min_length": -2.0 })).unwrap();
        assert!(req.validate().is_err());
    }
}
