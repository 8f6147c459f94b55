//! Response types for the spot data endpoint.

use serde::Serialize;
use serde_json::Value;

use crate::models::Position;

/// Normalized result of a spot data fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpotResponse {
    pub positions: Vec<Position>,
    pub usdt: f64,
}

impl SpotResponse {
    /// Coerce an arbitrary JSON body into a `SpotResponse`.
    ///
    /// `positions` falls back to empty unless it is an array, and `usdt` falls
    /// back to zero unless it is a number. Bodies that are not objects yield the
    /// empty response.
    ///
    /// Numbers outside the `f64` range (e.g. `1e400`) never reach this point:
    /// `serde_json` rejects them while parsing, so such a body fails the whole
    /// fetch with `Error::Parse` rather than producing an infinite balance.
    pub fn normalize(body: Value) -> Self {
        let (positions, usdt) = match body {
            Value::Object(mut fields) => (fields.remove("positions"), fields.remove("usdt")),
            _ => (None, None),
        };

        let positions = match positions {
            Some(Value::Array(items)) => items.into_iter().map(Position::new).collect(),
            _ => Vec::new(),
        };

        let usdt = usdt.as_ref().and_then(Value::as_f64).unwrap_or(0.0);

        Self { positions, usdt }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_non_numeric_usdt() {
        let resp = SpotResponse::normalize(json!({"usdt": "not-a-number"}));
        assert_eq!(resp, SpotResponse { positions: vec![], usdt: 0.0 });
    }

    #[test]
    fn test_normalize_passes_positions_through() {
        let raw = json!([
            {"asset": "BTC", "free": "0.5", "usdValue": 31000.12},
            {"asset": "ETH", "free": "2", "tags": ["staked"]}
        ]);
        let resp = SpotResponse::normalize(json!({"positions": raw.clone(), "usdt": 42.5}));

        assert_eq!(resp.usdt, 42.5);
        assert_eq!(resp.positions.len(), 2);
        assert_eq!(serde_json::to_value(&resp.positions).unwrap(), raw);
    }

    #[test]
    fn test_normalize_keeps_upstream_key_order() {
        let body = r#"{"positions":[{"symbol":"BTC","amount":1,"avgPrice":"61000.5"},{"zeta":true,"alpha":null}],"usdt":1}"#;
        let resp = SpotResponse::normalize(serde_json::from_str(body).unwrap());

        assert_eq!(
            serde_json::to_string(&resp.positions).unwrap(),
            r#"[{"symbol":"BTC","amount":1,"avgPrice":"61000.5"},{"zeta":true,"alpha":null}]"#
        );
    }

    #[test]
    fn test_normalize_wrong_positions_type() {
        let resp = SpotResponse::normalize(json!({"positions": {"asset": "BTC"}, "usdt": 7}));
        assert!(resp.positions.is_empty());
        assert_eq!(resp.usdt, 7.0);

        let resp = SpotResponse::normalize(json!({"positions": null, "usdt": null}));
        assert_eq!(resp, SpotResponse::default());
    }

    #[test]
    fn test_normalize_non_object_bodies() {
        for body in [json!(null), json!([1, 2]), json!("text"), json!(12)] {
            assert_eq!(SpotResponse::normalize(body), SpotResponse::default());
        }
    }

    #[test]
    fn test_normalize_integer_usdt() {
        let resp = SpotResponse::normalize(json!({"positions": [], "usdt": -3}));
        assert_eq!(resp.usdt, -3.0);
    }
}
