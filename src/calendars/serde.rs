use crate::calendars::Cal;
use crate::json::JSON;

impl JSON for Cal {}
