/// Response envelope carrying a decoded body plus a status code and
/// message. A code of 0 means success; exactly one of `body` or a
/// nonzero `code` is meaningful per instance.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Response<T> {
    #[serde(rename = "body")]
    body: Option<T>,
    #[serde(rename = "code")]
    code: i32,
    #[serde(rename = "msg")]
    msg: String,
}

#[allow(non_snake_case)]
impl<T> Response<T> {
    /// Success envelope wrapping `body`.
    pub fn new(body: T) -> Self {
        Self {
            body: Some(body),
            code: 0,
            msg: "Success".to_string(),
        }
    }

    /// Failure envelope carrying a nonzero `code` and a message.
    pub fn error(code: i32, msg: impl Into<String>) -> Self {
        Self {
            body: None,
            code,
            msg: msg.into(),
        }
    }

    /// Empty success envelope: no body, code 0, message `"Success"`.
    pub fn empty() -> Self {
        Self {
            body: None,
            code: 0,
            msg: "Success".to_string(),
        }
    }

    pub fn getBody(&self) -> &Option<T> {
        &self.body
    }

    pub fn getCode(&self) -> i32 {
        self.code
    }

    pub fn getMsg(&self) -> &String {
        &self.msg
    }

    pub fn setBody(&mut self, body: Option<T>) {
        self.body = body;
    }

    pub fn setCode(&mut self, code: i32) {
        self.code = code;
    }

    pub fn setMsg(&mut self, msg: String) {
        self.msg = msg;
    }
}

impl<T> Default for Response<T> {
    fn default() -> Self {
        Self::empty()
    }
}
