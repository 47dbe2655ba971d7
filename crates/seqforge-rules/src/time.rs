use async_trait::async_trait;
use jiff::fmt::strtime;
use seqforge_core::{Error, Expr, KeySource, Result, Session};
use typed_builder::TypedBuilder;

/// Calendar year, e.g. `2023`.
pub const FMT_YEAR: &str = "%Y";
/// Year and month, e.g. `202308`.
pub const FMT_MONTH: &str = "%Y%m";
/// Full date, e.g. `20230824`.
pub const FMT_DAY: &str = "%Y%m%d";
/// Year, month and abbreviated weekday, e.g. `202308Thu`.
pub const FMT_WEEK: &str = "%Y%m%a";

/// Formats the session timestamp.
///
/// The timestamp is captured once per `next` call, so every time field
/// in a tree renders the same instant. A keyed field additionally
/// contributes a key fragment, which lets counters roll over per day,
/// month, or any other period: the fragment format defaults to the
/// value format, then to [`FMT_DAY`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct TimeField {
    /// strftime pattern for the displayed value; empty renders nothing.
    #[builder(default, setter(into))]
    format: String,
    /// Whether this field contributes a key fragment.
    #[builder(default = false)]
    keyed: bool,
    /// Distinct strftime pattern for the key fragment.
    #[builder(default, setter(into))]
    key_format: String,
}

impl TimeField {
    fn render(&self, session: &Session, format: &str) -> Result<String> {
        strtime::format(format, session.now()).map_err(|source| Error::TimeFormat {
            format: format.to_owned(),
            source,
        })
    }
}

#[async_trait]
impl Expr for TimeField {
    async fn value(&self, session: &mut Session) -> Result<String> {
        if self.format.is_empty() {
            return Ok(String::new());
        }
        self.render(session, &self.format)
    }

    fn key_source(&self) -> Option<&dyn KeySource> {
        self.keyed.then_some(self)
    }
}

#[async_trait]
impl KeySource for TimeField {
    async fn key_fragment(&self, session: &mut Session) -> Result<String> {
        let format = if !self.key_format.is_empty() {
            &self.key_format
        } else if !self.format.is_empty() {
            &self.format
        } else {
            FMT_DAY
        };
        self.render(session, format)
    }
}
