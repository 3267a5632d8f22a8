use std::fmt::Display;

use almanac_ephem::{
    equation_of_time, lunar_distance, lunar_latitude, lunar_longitude, solar_longitude,
};
use almanac_riseset::{
    CrescentCriterion, RiseSetConfig, RiseSetResult, compute_all_events, daytime_temporal_hour,
    moonrise, moonset, nighttime_temporal_hour, phasis_on_or_after, phasis_on_or_before,
    visible_crescent,
};
use almanac_search::{
    ALL_SEASONS, MoonPhase, SearchConfig, Season, SiderealFrame, lunar_phase, new_moon_at_or_after,
    new_moon_before, next_moon_phase, prev_moon_phase, search_moon_phases, season_in_year,
};
use almanac_time::{Gregorian, Location, Moment, ephemeris_correction, fixed_from_moment};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::warn;

#[derive(Parser)]
#[command(name = "almanac", about = "Sun and Moon almanac: seasons, phases, rise/set, crescent")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Observer position; longitudes east positive, zone in hours east of UT.
#[derive(Args)]
struct PlaceArgs {
    /// Latitude in degrees (north positive)
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in degrees (east positive)
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
    /// Elevation above sea level in metres
    #[arg(long, default_value_t = 0.0)]
    elevation: f64,
    /// Standard-time zone offset in hours
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    zone: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum SeasonArg {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl From<SeasonArg> for Season {
    fn from(s: SeasonArg) -> Self {
        match s {
            SeasonArg::Spring => Season::Spring,
            SeasonArg::Summer => Season::Summer,
            SeasonArg::Autumn => Season::Autumn,
            SeasonArg::Winter => Season::Winter,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PhaseArg {
    New,
    FirstQuarter,
    Full,
    LastQuarter,
}

impl From<PhaseArg> for MoonPhase {
    fn from(p: PhaseArg) -> Self {
        match p {
            PhaseArg::New => MoonPhase::New,
            PhaseArg::FirstQuarter => MoonPhase::FirstQuarter,
            PhaseArg::Full => MoonPhase::Full,
            PhaseArg::LastQuarter => MoonPhase::LastQuarter,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CriterionArg {
    Shaukat,
    Yallop,
}

impl From<CriterionArg> for CrescentCriterion {
    fn from(c: CriterionArg) -> Self {
        match c {
            CriterionArg::Shaukat => CrescentCriterion::Shaukat,
            CriterionArg::Yallop => CrescentCriterion::Yallop,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Equinoxes and solstices of a Gregorian year (UT)
    Seasons {
        year: i64,
        /// Only this season
        #[arg(long, value_enum)]
        season: Option<SeasonArg>,
    },
    /// New moons on either side of a date (UT)
    NewMoon {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Principal lunar phases in a date range (UT)
    Phases {
        /// Start date (YYYY-MM-DD)
        date: String,
        /// Number of days to search
        #[arg(long, default_value_t = 30)]
        days: u32,
    },
    /// Next and previous occurrence of one phase (UT)
    Phase {
        /// Date (YYYY-MM-DD)
        date: String,
        #[arg(long, value_enum)]
        phase: PhaseArg,
    },
    /// Sun and Moon positions at 00:00 UT on a date
    Position {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Also print sidereal longitudes and the ayanamsha
        #[arg(long)]
        sidereal: bool,
    },
    /// Sunrise, sunset and twilight for a date (standard time)
    Sun {
        /// Date (YYYY-MM-DD)
        date: String,
        #[command(flatten)]
        place: PlaceArgs,
    },
    /// Moonrise and moonset for a date (standard time)
    Moon {
        /// Date (YYYY-MM-DD)
        date: String,
        #[command(flatten)]
        place: PlaceArgs,
    },
    /// Crescent visibility on the eve of a date and the surrounding phasis
    Crescent {
        /// Date (YYYY-MM-DD)
        date: String,
        #[command(flatten)]
        place: PlaceArgs,
        #[arg(long, value_enum, default_value = "shaukat")]
        criterion: CriterionArg,
    },
    /// ΔT (dynamical minus universal time) for mid-year
    DeltaT { year: i64 },
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let search = SearchConfig::default();
    let riseset = RiseSetConfig::default();

    match cli.command {
        Commands::Seasons { year, season } => {
            let seasons: Vec<Season> = match season {
                Some(s) => vec![s.into()],
                None => ALL_SEASONS.to_vec(),
            };
            for s in seasons {
                let tee = or_exit(season_in_year(s, year, &Gregorian, &search));
                println!("{:<18} {} UT", s.event_name(), format_moment(tee));
            }
        }

        Commands::NewMoon { date } => {
            let tee = or_exit(parse_date(&date)) as f64;
            let before = or_exit(new_moon_before(tee, &search));
            let after = or_exit(new_moon_at_or_after(tee, &search));
            println!("Previous new moon: {} UT", format_moment(before));
            println!("Next new moon:     {} UT", format_moment(after));
        }

        Commands::Phases { date, days } => {
            let start = or_exit(parse_date(&date)) as f64;
            let events = or_exit(search_moon_phases(start, start + f64::from(days), &search));
            if events.is_empty() {
                println!("No principal phases in range");
            }
            for ev in events {
                println!("{:<14} {} UT", ev.phase.name(), format_moment(ev.moment));
            }
        }

        Commands::Phase { date, phase } => {
            let tee = or_exit(parse_date(&date)) as f64;
            let phase = MoonPhase::from(phase);
            let prev = or_exit(prev_moon_phase(phase, tee, &search));
            let next = or_exit(next_moon_phase(phase, tee, &search));
            println!("Previous {}: {} UT", phase.name(), format_moment(prev.moment));
            println!("Next {}:     {} UT", phase.name(), format_moment(next.moment));
        }

        Commands::Position { date, sidereal } => {
            let tee = or_exit(parse_date(&date)) as f64;
            println!("Sun longitude:     {:.4} deg", solar_longitude(tee));
            println!("Moon longitude:    {:.4} deg", lunar_longitude(tee));
            println!("Moon latitude:     {:.4} deg", lunar_latitude(tee));
            println!("Moon distance:     {:.0} m", lunar_distance(tee));
            println!("Lunar phase:       {:.4} deg", lunar_phase(tee));
            println!("Equation of time:  {:.2} min", equation_of_time(tee) * 1440.0);
            if sidereal {
                let frame = or_exit(SiderealFrame::new(&Gregorian, &search));
                println!("Ayanamsha:         {:.4} deg", frame.ayanamsha_deg(tee));
                println!("Sidereal Sun:      {:.4} deg", frame.sidereal_solar_longitude(tee));
                println!("Sidereal Moon:     {:.4} deg", frame.sidereal_lunar_longitude(tee));
            }
        }

        Commands::Sun { date, place } => {
            let day = or_exit(parse_date(&date));
            let location = or_exit(place.location());
            for (event, result) in or_exit(compute_all_events(day, &location, &riseset)) {
                match result {
                    Ok(RiseSetResult::Event(t)) => println!("{:<18} {}", event.name(), format_moment(t)),
                    Ok(RiseSetResult::NeverRises) => {
                        println!("{:<18} does not occur (Sun stays below)", event.name())
                    }
                    Ok(RiseSetResult::NeverSets) => {
                        println!("{:<18} does not occur (Sun stays above)", event.name())
                    }
                    Err(e) => {
                        warn!("{}: {e}", event.name());
                        println!("{:<18} did not converge", event.name())
                    }
                }
            }
            for (label, hour) in [
                ("Daytime hour:", daytime_temporal_hour(day, &location, &riseset)),
                ("Nighttime hour:", nighttime_temporal_hour(day, &location, &riseset)),
            ] {
                match hour {
                    Ok(Some(h)) => println!("{label:<18} {:.2} min", h * 1440.0),
                    Ok(None) => {}
                    Err(e) => println!("{label:<18} unavailable ({e})"),
                }
            }
        }

        Commands::Moon { date, place } => {
            let day = or_exit(parse_date(&date));
            let location = or_exit(place.location());
            match or_exit(moonrise(day, &location, &riseset)) {
                Some(t) => println!("Moonrise: {}", format_moment(t)),
                None => println!("Moonrise: none on this date"),
            }
            match or_exit(moonset(day, &location, &riseset)) {
                Some(t) => println!("Moonset:  {}", format_moment(t)),
                None => println!("Moonset:  none on this date"),
            }
        }

        Commands::Crescent { date, place, criterion } => {
            let day = or_exit(parse_date(&date));
            let location = or_exit(place.location());
            let criterion = CrescentCriterion::from(criterion);
            let visible = or_exit(visible_crescent(day, &location, criterion, &riseset));
            println!(
                "Crescent on the eve of {}: {}",
                Gregorian.date_from_fixed(day),
                if visible { "visible" } else { "not visible" }
            );
            let before = or_exit(phasis_on_or_before(day, &location, criterion, &riseset));
            let after = or_exit(phasis_on_or_after(day, &location, criterion, &riseset));
            println!("Phasis on or before: {}", Gregorian.date_from_fixed(before));
            println!("Phasis on or after:  {}", Gregorian.date_from_fixed(after));
        }

        Commands::DeltaT { year } => {
            let mid_year = or_exit(Gregorian.checked_fixed_from_date(year, 7, 1)) as f64;
            println!("ΔT {year}: {:.2} s", ephemeris_correction(mid_year) * 86_400.0);
        }
    }
}

impl PlaceArgs {
    fn location(&self) -> Result<Location, String> {
        Location::with_zone_hours(self.lat, self.lon, self.elevation, self.zone)
            .map_err(|e| e.to_string())
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}

fn or_exit<T, E: Display>(result: Result<T, E>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn parse_date(s: &str) -> Result<i64, String> {
    // "YYYY-MM-DD", with an optional leading minus on the year
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s),
    };
    let parts: Vec<&str> = rest.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i64 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("{e}"))?;
    Gregorian
        .checked_fixed_from_date(sign * year, month, day)
        .map_err(|e| e.to_string())
}

/// `YYYY-MM-DD hh:mm`, rounded to the minute.
fn format_moment(tee: Moment) -> String {
    let rounded = (tee * 1440.0).round() / 1440.0;
    let date = fixed_from_moment(rounded);
    let total = ((rounded - date as f64) * 1440.0).round() as i64;
    format!(
        "{} {:02}:{:02}",
        Gregorian.date_from_fixed(date),
        total / 60,
        total % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use almanac_time::{CivilCalendar, hours, standard_from_universal};

    #[test]
    fn parse_date_valid() {
        assert_eq!(parse_date("2024-03-20"), Ok(Gregorian.fixed_from_date(2024, 3, 20)));
        assert_eq!(parse_date("-0044-03-15"), Ok(Gregorian.fixed_from_date(-44, 3, 15)));
    }

    #[test]
    fn parse_date_invalid() {
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("2024/02/01").is_err());
        assert!(parse_date("2024-xx-01").is_err());
    }

    #[test]
    fn format_rounds_to_minute() {
        let d = Gregorian.fixed_from_date(2024, 3, 20) as f64;
        assert_eq!(format_moment(d + hours(3.1)), "2024-03-20 03:06");
        assert_eq!(format_moment(d + 1.0 - 1e-6), "2024-03-21 00:00");
    }

    #[test]
    fn place_validation() {
        let place = PlaceArgs { lat: 95.0, lon: 0.0, elevation: 0.0, zone: 0.0 };
        assert!(place.location().is_err());
        let place = PlaceArgs { lat: 51.5, lon: -0.1, elevation: 10.0, zone: 0.0 };
        assert!(place.location().is_ok());
    }

    #[test]
    fn cli_parses_negative_longitude() {
        let cli = Cli::try_parse_from([
            "almanac", "sun", "2024-06-21", "--lat", "40.7", "--lon", "-74.0", "--zone", "-4",
        ])
        .unwrap();
        match cli.command {
            Commands::Sun { place, .. } => {
                assert_eq!(place.lon, -74.0);
                assert_eq!(place.zone, -4.0);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn standard_time_shift_used_for_display() {
        let loc = Location::with_zone_hours(0.0, 0.0, 0.0, 3.0).unwrap();
        let d = Gregorian.fixed_from_date(2024, 1, 1) as f64;
        assert_eq!(format_moment(standard_from_universal(d, &loc)), "2024-01-01 03:00");
    }
}
