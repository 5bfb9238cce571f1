use chrono_tz::Tz;
use moonwise::{
    FindZone, GeoCoordinate, Locate, Meeus, Moment, PhaseCalendar, Phase, Resolved, Resolver,
    Result, SeasonalNamer, StatusComposer, Zone,
};

struct StubLocator;

impl Locate for StubLocator {
    fn locate(&self) -> Result<GeoCoordinate> {
        GeoCoordinate::new(40.4168, -3.7038)
    }
}

struct StubFinder;

impl FindZone for StubFinder {
    fn find_zone(&self, _: GeoCoordinate) -> Result<Tz> {
        Ok(chrono_tz::Europe::Madrid)
    }
}

fn resolver() -> Resolver<StubLocator, StubFinder> {
    Resolver::new(StubLocator, StubFinder)
}

#[test]
fn bare_date_resolves_through_located_zone_to_a_full_report() {
    let resolved = resolver().resolve(Some("2024-01-25"), None, None).unwrap();
    assert!(matches!(resolved.zone, Zone::Named(tz) if tz == chrono_tz::Europe::Madrid));

    let report = StatusComposer::new(Meeus).report(&resolved).unwrap();
    assert_eq!(report.lines().count(), 9);
    assert!(report.contains("Full Wolf Moon"), "report:\n{report}");
    assert!(report.contains("25 January 2024"));
    assert!(report.contains("15 Shevat 5784"));
}

#[test]
fn offset_timestamp_reports_without_any_lookup() {
    // The offset in the text pins both the instant and the display zone;
    // an instant (not a date) always reports "in".
    let resolved = resolver()
        .resolve(Some("2024-04-10T21:00:00-04:00"), None, None)
        .unwrap();
    assert!(matches!(resolved.zone, Zone::Fixed(_)));

    let report = StatusComposer::new(Meeus).report(&resolved).unwrap();
    assert!(report.contains("Mercury Retrograde in"), "report:\n{report}");
    assert!(!report.contains(" enters "));
    assert!(!report.contains(" leaves "));
}

#[test]
fn explicit_zone_controls_the_calendar_date() {
    // 2024-01-11 11:57 UTC new moon falls on Jan 12 in UTC+14.
    let kiritimati = Some("Pacific/Kiritimati".parse::<Zone>().unwrap());
    let on_the_11th = resolver().resolve(Some("2024-01-11"), kiritimati, None).unwrap();
    let on_the_12th = resolver().resolve(Some("2024-01-12"), kiritimati, None).unwrap();

    let calendar = PhaseCalendar::new(Meeus);
    assert_eq!(calendar.phase_at(&on_the_11th).unwrap(), Phase::WaningCrescent);
    assert_eq!(calendar.phase_at(&on_the_12th).unwrap(), Phase::New);
}

#[test]
fn august_2024_full_moon_is_a_seasonal_blue_moon() {
    let resolved = Resolved {
        moment: Moment::Date(chrono::NaiveDate::from_ymd_opt(2024, 8, 19).unwrap()),
        zone: Zone::UTC,
    };
    let name = SeasonalNamer::new(Meeus).name_at(&resolved).unwrap();
    assert_eq!(name.name(), "Blue");
}

#[test]
fn nonsense_input_fails_cleanly() {
    assert!(resolver().resolve(Some("soon-ish, probably"), None, None).is_err());
}
