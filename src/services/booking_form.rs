use crate::errors::AppError;
use crate::models::{Booking, FormErrors, FormField, FormPhase, Occasion, SubmitEvent};
use crate::services::navigation::Navigator;
use crate::services::storage::KeyValueStore;
use crate::services::time_slots::{update_times, TimesAction};

/// Storage key the completed booking is written under.
pub const BOOKINGS_KEY: &str = "Bookings";
/// View shown after a successful submission.
pub const CONFIRMED_PATH: &str = "/confirmed";

pub const MIN_GUESTS: i64 = 1;
pub const MAX_GUESTS: i64 = 10;

const DATE_REQUIRED: &str = "Please select a date";
const TIME_REQUIRED: &str = "Please select a time";
const GUESTS_OUT_OF_RANGE: &str = "Number of guests must be between 1 and 10";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; `BookingForm::errors` holds the messages.
    Invalid(FormErrors),
    Submitted(Booking),
}

/// Field state and validation for one reservation form.
#[derive(Debug, Clone)]
pub struct BookingForm {
    date: String,
    time: String,
    guests: String,
    occasion: Occasion,
    errors: FormErrors,
    phase: FormPhase,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            date: String::new(),
            time: String::new(),
            guests: "1".to_string(),
            occasion: Occasion::default(),
            errors: FormErrors::new(),
            phase: FormPhase::Editing,
        }
    }
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn guests(&self) -> &str {
        &self.guests
    }

    pub fn occasion(&self) -> Occasion {
        self.occasion
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Sets the date and returns the time-slot list to render next.
    pub fn on_date_change(
        &mut self,
        date: &str,
        available_times: &[String],
    ) -> Result<Vec<String>, AppError> {
        self.ensure_open()?;
        self.date = date.to_string();
        self.touch();
        Ok(update_times(available_times, &TimesAction::update(date)))
    }

    /// Change notification keyed by field name. Date changes go through
    /// `on_date_change`, so callers get the refreshed time list back.
    pub fn set_field(
        &mut self,
        field: FormField,
        value: &str,
        available_times: &[String],
    ) -> Result<Vec<String>, AppError> {
        self.ensure_open()?;
        match field {
            FormField::Date => return self.on_date_change(value, available_times),
            FormField::Time => self.time = value.to_string(),
            FormField::Guests => self.guests = value.to_string(),
            FormField::Occasion => self.occasion = value.parse()?,
        }
        self.touch();
        Ok(available_times.to_vec())
    }

    pub fn validate(&mut self) -> bool {
        let checked = self.check();
        self.errors = checked.err().unwrap_or_default();
        self.errors.is_empty()
    }

    /// Validates, then persists the booking and navigates to the
    /// confirmation view. A storage failure leaves the form open and
    /// skips navigation.
    pub fn submit(
        &mut self,
        event: &mut SubmitEvent,
        store: &dyn KeyValueStore,
        navigator: &dyn Navigator,
    ) -> Result<SubmitOutcome, AppError> {
        event.prevent_default();
        self.ensure_open()?;

        let booking = match self.check() {
            Ok(booking) => {
                self.errors = FormErrors::new();
                booking
            }
            Err(errors) => {
                tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "booking form invalid");
                self.errors = errors.clone();
                self.phase = FormPhase::Invalid;
                return Ok(SubmitOutcome::Invalid(errors));
            }
        };
        let serialized = serde_json::to_string(&booking)?;
        store.set(BOOKINGS_KEY, &serialized).map_err(|e| {
            tracing::error!(error = %e, "failed to persist booking");
            e
        })?;

        self.phase = FormPhase::Submitted;
        tracing::info!(
            date = %booking.date,
            time = %booking.time,
            guests = %booking.guests,
            occasion = %booking.occasion,
            "booking submitted"
        );
        navigator.navigate(CONFIRMED_PATH);

        Ok(SubmitOutcome::Submitted(booking))
    }

    /// Fresh validation pass over the current fields.
    fn check(&self) -> Result<Booking, FormErrors> {
        let mut errors = FormErrors::new();

        if self.date.is_empty() {
            errors.insert(FormField::Date, DATE_REQUIRED);
        }
        if self.time.is_empty() {
            errors.insert(FormField::Time, TIME_REQUIRED);
        }
        let guests_in_range = parse_leading_int(&self.guests)
            .is_some_and(|n| (MIN_GUESTS..=MAX_GUESTS).contains(&n));
        if !guests_in_range {
            errors.insert(FormField::Guests, GUESTS_OUT_OF_RANGE);
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Booking {
            date: self.date.clone(),
            time: self.time.clone(),
            guests: self.guests.clone(),
            occasion: self.occasion,
        })
    }

    fn ensure_open(&self) -> Result<(), AppError> {
        if self.phase == FormPhase::Submitted {
            tracing::warn!("rejected change to a submitted booking form");
            return Err(AppError::FormClosed);
        }
        Ok(())
    }

    fn touch(&mut self) {
        if self.phase == FormPhase::Invalid {
            self.phase = FormPhase::Editing;
        }
    }
}

/// Integer prefix of `s`: surrounding whitespace and one sign allowed,
/// anything after the digits ignored. Values too large for i64 saturate.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
