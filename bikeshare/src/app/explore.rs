use std::{
    collections::{hash_map::Entry, HashMap},
    io::{BufRead, Write},
    time::Instant,
};

use bikeshare_core::{
    filter::{DayFilter, MonthFilter},
    pagination::PageCursor,
    stats::{
        StationPopularityReport, TimeOfTravelReport, TripDurationReport, UserDemographicsReport,
    },
    BikeshareError, City, TripDataset, TripSource,
};

use super::{
    console::Console,
    presentation::{
        render_elapsed, render_records, render_station_popularity, render_time_of_travel,
        render_trip_duration, render_user_demographics, separator,
    },
};

const CITY_QUESTION: &str =
    "Type the name of the city you would like to see the data for: Chicago, New York, or Washington";
const MONTH_QUESTION: &str =
    "For which month? January, February, March, April, May, June, or All?";
const DAY_QUESTION: &str = "Choose which day of the week: Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday, or All?";
const CONTINUE_QUESTION: &str = "Do you wish to continue? Enter yes or no";
const RESTART_QUESTION: &str = "Would you like to restart? Enter yes or no.";

/// the interactive explorer. each round asks for a city and filters, prints
/// the four reports, optionally pages through raw trips and offers a restart.
/// datasets are kept in memory between rounds.
pub struct ExploreSession<'a, S> {
    source: &'a S,
    page_size: usize,
    datasets: HashMap<City, TripDataset>,
}

/// outcome of one step of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    /// the console input is exhausted
    Quit,
}

impl<'a, S: TripSource> ExploreSession<'a, S> {
    pub fn new(source: &'a S, page_size: usize) -> Self {
        Self {
            source,
            page_size,
            datasets: HashMap::new(),
        }
    }

    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<(), BikeshareError> {
        loop {
            if self.run_round(console)? == Step::Quit {
                return Ok(());
            }
            match console.ask(RESTART_QUESTION)? {
                Some(answer) if answer.eq_ignore_ascii_case("yes") => continue,
                _ => return Ok(()),
            }
        }
    }

    fn run_round<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<Step, BikeshareError> {
        console.say("Hello! Let's explore some US bikeshare data!")?;
        let Some(city) = console.ask_until_valid::<City>(CITY_QUESTION)? else {
            return Ok(Step::Quit);
        };
        let Some(month) = console.ask_until_valid::<MonthFilter>(MONTH_QUESTION)? else {
            return Ok(Step::Quit);
        };
        let Some(day) = console.ask_until_valid::<DayFilter>(DAY_QUESTION)? else {
            return Ok(Step::Quit);
        };
        console.say(&separator())?;

        let filtered = match self.dataset(&city) {
            Ok(dataset) => dataset.filter(&month, &day)?,
            Err(e) => {
                log::error!("{e}");
                console.say(&format!("Unable to load trip data for {city}: {e}"))?;
                return Ok(Step::Continue);
            }
        };
        if filtered.is_empty() {
            console.say(&format!(
                "No {city} trips match month={month}, day={day}."
            ))?;
        }

        let records = filtered.records();
        show_timed(console, || {
            render_time_of_travel(&TimeOfTravelReport::from_records(records))
        })?;
        show_timed(console, || {
            render_station_popularity(&StationPopularityReport::from_records(records))
        })?;
        show_timed(console, || {
            render_trip_duration(&TripDurationReport::from_records(records))
        })?;
        show_timed(console, || {
            render_user_demographics(&UserDemographicsReport::from_records(
                records,
                filtered.capabilities(),
            ))
        })?;

        view_raw_trips(console, &filtered, self.page_size)
    }

    /// loads a city dataset on first use.
    fn dataset(&mut self, city: &City) -> Result<&TripDataset, BikeshareError> {
        match self.datasets.entry(*city) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let dataset = self.source.load(city)?;
                Ok(entry.insert(dataset))
            }
        }
    }
}

/// computes and prints one report along with its computation time.
fn show_timed<R, W, F>(console: &mut Console<R, W>, report: F) -> Result<(), BikeshareError>
where
    R: BufRead,
    W: Write,
    F: FnOnce() -> String,
{
    let start = Instant::now();
    let text = report();
    let elapsed = start.elapsed();
    log::debug!("report computed in {elapsed:?}");
    console.say(&format!("\n{text}\n"))?;
    console.say(&render_elapsed(elapsed))?;
    console.say(&separator())
}

fn view_raw_trips<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dataset: &TripDataset,
    page_size: usize,
) -> Result<Step, BikeshareError> {
    let question =
        format!("Would you like to view {page_size} rows of individual trip data? Enter yes or no");
    match console.confirm(&question)? {
        None => return Ok(Step::Quit),
        Some(false) => return Ok(Step::Continue),
        Some(true) => {}
    }
    let mut cursor = PageCursor::with_page_size(dataset.records(), page_size)?;
    loop {
        let page = cursor.next_page();
        if page.is_empty() {
            console.say("There is no more trip data to display.")?;
            return Ok(Step::Continue);
        }
        console.say(&render_records(page.records, dataset.capabilities()))?;
        if !page.has_more {
            return Ok(Step::Continue);
        }
        match console.confirm(CONTINUE_QUESTION)? {
            None => return Ok(Step::Quit),
            Some(false) => return Ok(Step::Continue),
            Some(true) => {}
        }
    }
}
