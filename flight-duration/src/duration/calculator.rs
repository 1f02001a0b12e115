//! Flight duration calculation.

use chrono::{DateTime, LocalResult, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;
use serde::Serialize;

use crate::directory::TimezoneDirectory;
use crate::domain::{IataCode, LocalDateTime};

use super::elapsed::ElapsedDuration;
use super::error::{DurationError, SystemError, ValidationError};
use super::request::DurationRequest;

/// Output format for localized instants: minute precision with offset.
const LOCALIZED_FORMAT: &str = "%Y-%m-%dT%H:%M%:z";

/// Result of a duration calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationResult {
    /// Departure time with the departure airport's UTC offset
    pub from: String,

    /// Arrival time with the destination airport's UTC offset
    pub to: String,

    /// Absolute elapsed time, e.g. `P0DT8H15M`
    pub duration: String,
}

/// Computes elapsed flight time between two local wall-clock times.
///
/// Holds only a shared borrow of the directory, so constructing one per
/// request is free.
#[derive(Debug, Clone, Copy)]
pub struct DurationCalculator<'a> {
    directory: &'a TimezoneDirectory,
}

impl<'a> DurationCalculator<'a> {
    /// Create a calculator backed by the given directory.
    pub fn new(directory: &'a TimezoneDirectory) -> Self {
        Self { directory }
    }

    /// Validate a request and compute its duration.
    pub fn compute(&self, request: &DurationRequest) -> Result<DurationResult, DurationError> {
        let request = request.validate()?;

        let departure_tz = self
            .directory
            .resolve(request.departure_airport.as_str())
            .map_err(|_| ValidationError::UnknownDepartureAirport(request.departure_airport))?;
        let destination_tz = self
            .directory
            .resolve(request.destination_airport.as_str())
            .map_err(|_| ValidationError::UnknownDestinationAirport(request.destination_airport))?;

        let from_local = localize(request.from, request.departure_airport, departure_tz)?;
        let to_local = localize(request.to, request.destination_airport, destination_tz)?;
        let elapsed = ElapsedDuration::between(&from_local, &to_local);

        tracing::debug!(
            from = %from_local,
            to = %to_local,
            minutes = elapsed.total_minutes(),
            "computed flight duration"
        );

        Ok(DurationResult {
            from: from_local.format(LOCALIZED_FORMAT).to_string(),
            to: to_local.format(LOCALIZED_FORMAT).to_string(),
            duration: elapsed.to_string(),
        })
    }

    /// Compute a duration from four plain strings.
    pub fn compute_duration(
        &self,
        from: &str,
        to: &str,
        departure_airport: &str,
        destination_airport: &str,
    ) -> Result<DurationResult, DurationError> {
        self.compute(&DurationRequest::from_strs(
            from,
            to,
            departure_airport,
            destination_airport,
        ))
    }
}

/// Attach the airport's timezone to a wall-clock time.
///
/// Ambiguous times (clocks going back) resolve to the earlier instant.
/// Times that do not exist (clocks going forward) are read with the offset
/// in force before the gap, which moves them forward by the gap's length.
fn localize(
    local: LocalDateTime,
    airport: IataCode,
    timezone: &str,
) -> Result<DateTime<Tz>, SystemError> {
    let tz: Tz = timezone.parse().map_err(|_| SystemError::UnknownTimezone {
        airport,
        timezone: timezone.to_string(),
    })?;
    let naive = local.naive();

    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => {
            let out_of_range = || SystemError::OutOfRange { airport };
            let day_before = naive
                .checked_sub_signed(TimeDelta::days(1))
                .ok_or_else(out_of_range)?;
            let offset = tz.offset_from_utc_datetime(&day_before).fix();
            let utc = naive
                .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))
                .ok_or_else(out_of_range)?;
            Ok(tz.from_utc_datetime(&utc))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::Param;

    const AIRPORTS: &str = r#"340,"Frankfurt am Main Airport","Frankfurt","Germany","FRA","EDDF",50.033333,8.570556,364,1,"E","Europe/Berlin","airport","OurAirports"
3797,"John F Kennedy International Airport","New York","United States","JFK","KJFK",40.63980103,-73.77890015,13,-5,"A","America/New_York","airport","OurAirports"
507,"London Heathrow Airport","London","United Kingdom","LHR","EGLL",51.4706,-0.461941,83,0,"E","Europe/London","airport","OurAirports"
1678,"Zurich Airport","Zurich","Switzerland","ZRH","LSZH",47.464699,8.54917,1416,1,"E","Europe/Zurich","airport","OurAirports"
3179,"Phuket International Airport","Phuket","Thailand","HKT","VTSP",8.1132,98.316902,82,7,"N","Asia/Bangkok","airport","OurAirports"
580,"Amsterdam Airport Schiphol","Amsterdam","Netherlands","AMS","EHAM",52.308601,4.76389,-11,1,"E","Europe/Amsterdam","airport","OurAirports"
3576,"Miami International Airport","Miami","United States","MIA","KMIA",25.79319953918457,-80.29060363769531,8,-5,"A","America/New_York","airport","OurAirports"
3125,"Tribhuvan International Airport","Kathmandu","Nepal","KTM","VNKT",27.6966,85.3591,4390,5.75,"N","Asia/Kathmandu","airport","OurAirports"
3361,"Sydney Kingsford Smith International Airport","Sydney","Australia","SYD","YSSY",-33.94609832763672,151.177001953125,21,10,"O","Australia/Sydney","airport","OurAirports"
9999,"Olympus Mons Spaceport","Tharsis","Mars","OLY","MARS",0,0,0,0,"U","Mars/Olympus_Mons","airport","OurAirports"
"#;

    fn directory() -> TimezoneDirectory {
        TimezoneDirectory::from_reader(AIRPORTS.as_bytes()).unwrap()
    }

    fn compute(
        from: &str,
        to: &str,
        dep: &str,
        dest: &str,
    ) -> Result<DurationResult, DurationError> {
        let dir = directory();
        DurationCalculator::new(&dir).compute_duration(from, to, dep, dest)
    }

    fn validation_error(result: Result<DurationResult, DurationError>) -> ValidationError {
        match result {
            Err(DurationError::Validation(err)) => err,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn frankfurt_to_new_york() {
        let result = compute("2023-05-01T10:30", "2023-05-01T14:45", "FRA", "JFK").unwrap();
        assert_eq!(result.from, "2023-05-01T10:30+02:00");
        assert_eq!(result.to, "2023-05-01T14:45-04:00");
        // 08:30Z to 18:45Z
        assert_eq!(result.duration, "P0DT10H15M");
    }

    #[test]
    fn zurich_to_phuket_overnight() {
        let result = compute("2016-12-14T13:50", "2016-12-15T06:50", "ZRH", "HKT").unwrap();
        assert_eq!(result.from, "2016-12-14T13:50+01:00");
        assert_eq!(result.to, "2016-12-15T06:50+07:00");
        assert_eq!(result.duration, "P0DT11H0M");
    }

    #[test]
    fn amsterdam_to_miami_after_us_dst_ends() {
        let result = compute("2016-11-10T16:25", "2016-11-10T20:40", "AMS", "MIA").unwrap();
        assert_eq!(result.from, "2016-11-10T16:25+01:00");
        assert_eq!(result.to, "2016-11-10T20:40-05:00");
        assert_eq!(result.duration, "P0DT10H15M");
    }

    #[test]
    fn identical_instants_give_zero() {
        let result = compute("2023-05-01T10:30", "2023-05-01T09:30", "FRA", "LHR").unwrap();
        assert_eq!(result.to, "2023-05-01T09:30+01:00");
        assert_eq!(result.duration, "P0DT0H0M");
    }

    #[test]
    fn fractional_hour_offset() {
        let result = compute("2023-05-01T10:30", "2023-05-01T14:15", "FRA", "KTM").unwrap();
        assert_eq!(result.to, "2023-05-01T14:15+05:45");
        assert_eq!(result.duration, "P0DT0H0M");
    }

    #[test]
    fn southern_hemisphere_summer_time() {
        let result = compute("2024-01-10T22:00", "2024-01-10T12:00", "SYD", "LHR").unwrap();
        assert_eq!(result.from, "2024-01-10T22:00+11:00");
        assert_eq!(result.to, "2024-01-10T12:00+00:00");
        assert_eq!(result.duration, "P0DT1H0M");
    }

    #[test]
    fn arrival_before_departure_is_not_negative() {
        let forward = compute("2023-05-01T10:30", "2023-05-01T14:45", "FRA", "JFK").unwrap();
        let reverse = compute("2023-05-01T14:45", "2023-05-01T10:30", "JFK", "FRA").unwrap();
        assert_eq!(forward.duration, reverse.duration);

        let backwards = compute("2023-05-02T10:30", "2023-05-01T10:30", "FRA", "FRA").unwrap();
        assert_eq!(backwards.duration, "P1DT0H0M");
    }

    #[test]
    fn long_span_counts_days_only() {
        let result = compute("2023-01-01T00:00", "2023-03-15T00:00", "FRA", "FRA").unwrap();
        assert_eq!(result.duration, "P73DT0H0M");

        let result = compute("2020-01-01T00:00", "2023-01-01T00:00", "LHR", "LHR").unwrap();
        assert_eq!(result.duration, "P1096DT0H0M");
    }

    #[test]
    fn span_across_spring_forward() {
        let result = compute("2023-03-26T01:00", "2023-03-26T03:00", "FRA", "FRA").unwrap();
        assert_eq!(result.from, "2023-03-26T01:00+01:00");
        assert_eq!(result.to, "2023-03-26T03:00+02:00");
        assert_eq!(result.duration, "P0DT1H0M");
    }

    #[test]
    fn nonexistent_local_time_moves_forward() {
        let result = compute("2023-03-26T02:30", "2023-03-26T04:00", "FRA", "FRA").unwrap();
        assert_eq!(result.from, "2023-03-26T03:30+02:00");
        assert_eq!(result.duration, "P0DT0H30M");
    }

    #[test]
    fn ambiguous_local_time_uses_earlier_instant() {
        let result = compute("2023-10-29T02:30", "2023-10-29T03:30", "FRA", "FRA").unwrap();
        assert_eq!(result.from, "2023-10-29T02:30+02:00");
        assert_eq!(result.to, "2023-10-29T03:30+01:00");
        assert_eq!(result.duration, "P0DT2H0M");
    }

    #[test]
    fn missing_parameter() {
        let dir = directory();
        let request = DurationRequest {
            to: Param::Absent,
            ..DurationRequest::from_strs("2023-05-01T10:30", "", "FRA", "JFK")
        };
        let err = validation_error(DurationCalculator::new(&dir).compute(&request));
        assert_eq!(err.to_string(), "All parameters are required.");
    }

    #[test]
    fn malformed_departure_code() {
        let err = validation_error(compute(
            "2023-05-01T10:30",
            "2023-05-01T14:45",
            "frankfurt",
            "JFK",
        ));
        assert_eq!(
            err.to_string(),
            "Invalid departure airport code. Expected: 3 uppercase letters"
        );
    }

    #[test]
    fn unknown_departure_airport() {
        let err = validation_error(compute(
            "2023-05-01T10:30",
            "2023-05-01T14:45",
            "XXX",
            "JFK",
        ));
        assert_eq!(
            err,
            ValidationError::UnknownDepartureAirport(IataCode::parse("XXX").unwrap())
        );
        assert_eq!(err.to_string(), "Unknown departure airport code: XXX");
    }

    #[test]
    fn unknown_destination_airport() {
        let err = validation_error(compute(
            "2023-05-01T10:30",
            "2023-05-01T14:45",
            "FRA",
            "QQQ",
        ));
        assert_eq!(err.to_string(), "Unknown destination airport code: QQQ");
    }

    #[test]
    fn unknown_departure_reported_before_unknown_destination() {
        let err = validation_error(compute(
            "2023-05-01T10:30",
            "2023-05-01T14:45",
            "XXX",
            "QQQ",
        ));
        assert_eq!(err.to_string(), "Unknown departure airport code: XXX");
    }

    #[test]
    fn code_format_checked_before_lookup() {
        let err = validation_error(compute(
            "2023-05-01T10:30",
            "2023-05-01T14:45",
            "XXX",
            "qqq",
        ));
        assert!(matches!(err, ValidationError::DestinationAirportCode(_)));
    }

    #[test]
    fn unresolvable_timezone_is_system_error() {
        let result = compute("2023-05-01T10:30", "2023-05-01T14:45", "OLY", "JFK");
        match result {
            Err(DurationError::System(SystemError::UnknownTimezone { airport, timezone })) => {
                assert_eq!(airport.as_str(), "OLY");
                assert_eq!(timezone, "Mars/Olympus_Mons");
            }
            other => panic!("expected system error, got {other:?}"),
        }
    }

    #[test]
    fn result_serializes_to_json_object() {
        let result = compute("2023-05-01T10:30", "2023-05-01T14:45", "FRA", "JFK").unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "from": "2023-05-01T10:30+02:00",
                "to": "2023-05-01T14:45-04:00",
                "duration": "P0DT10H15M",
            })
        );
    }
}
