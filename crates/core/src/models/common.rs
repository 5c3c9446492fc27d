use serde::Serialize;

/// Success envelope wrapped around every non-error JSON response
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            ok: true,
            message: None,
            data,
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            ok: true,
            message: Some(message.into()),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_omitted_when_absent() {
        let value = serde_json::to_value(Envelope::data(vec![1, 2])).unwrap();
        assert_eq!(value, json!({ "ok": true, "data": [1, 2] }));
    }

    #[test]
    fn test_message_included() {
        let value = serde_json::to_value(Envelope::with_message("done", 7)).unwrap();
        assert_eq!(value, json!({ "ok": true, "message": "done", "data": 7 }));
    }
}
