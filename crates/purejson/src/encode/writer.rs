use crate::encode::primitives;

/// Output buffer for the encoder. Containers are laid out as
/// `{ k: v, k: v }` / `[ a, b ]`, so an empty container comes out as `{  }`.
pub struct JsonWriter {
    out: String,
}

impl JsonWriter {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
        }
    }

    pub fn begin_object(&mut self) {
        self.out.push_str("{ ");
    }

    pub fn end_object(&mut self) {
        self.out.push_str(" }");
    }

    pub fn begin_array(&mut self) {
        self.out.push_str("[ ");
    }

    pub fn end_array(&mut self) {
        self.out.push_str(" ]");
    }

    pub fn item_separator(&mut self) {
        self.out.push_str(", ");
    }

    pub fn key_separator(&mut self) {
        self.out.push_str(": ");
    }

    pub fn raw(&mut self, s: &str) {
        self.out.push_str(s);
    }

    pub fn string(&mut self, s: &[u8]) {
        primitives::escape_and_quote_into(&mut self.out, s);
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

