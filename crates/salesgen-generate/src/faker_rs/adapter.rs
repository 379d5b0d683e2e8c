use fake::Fake;
use fake::faker::address::raw::{CityName, StateName};
use fake::faker::internet::raw::FreeEmail;
use fake::faker::lorem::raw::Word;
use fake::faker::name::raw::Name;
use fake::locales::EN;
use rand::Rng;

/// Locale every text field is synthesized in.
pub const TEXT_LOCALE: &str = "en_US";

/// Text synthesis backed by `fake`.
///
/// Holds no random state of its own: every call draws from the rng passed
/// in, so output is reproducible for a fixed seed and `fake` version.
#[derive(Clone, Copy, Debug, Default)]
pub struct FakerText;

impl FakerText {
    pub fn locale(&self) -> &'static str {
        TEXT_LOCALE
    }

    pub fn name<R: Rng>(&self, rng: &mut R) -> String {
        Name(EN).fake_with_rng(rng)
    }

    pub fn email<R: Rng>(&self, rng: &mut R) -> String {
        FreeEmail(EN).fake_with_rng(rng)
    }

    pub fn city<R: Rng>(&self, rng: &mut R) -> String {
        CityName(EN).fake_with_rng(rng)
    }

    pub fn state<R: Rng>(&self, rng: &mut R) -> String {
        StateName(EN).fake_with_rng(rng)
    }

    pub fn word<R: Rng>(&self, rng: &mut R) -> String {
        Word(EN).fake_with_rng(rng)
    }
}
