use serde_json::{Number, Value};

pub trait ConfigProvider: Send + Sync {
    fn multiplier(&self) -> Number;
    fn sample_record(&self) -> Value;
}
