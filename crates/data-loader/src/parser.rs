//! Parser for the catalog data files.
//!
//! All three files are UTF-8 text with `::` separated fields:
//! - movies.dat: header line, then
//!   `id::title::release_date::popularity::vote_count::vote_average::revenue::return[::<genre>...]`
//! - cast.dat: `movieId::actor_name`
//! - crew.dat: `movieId::person_name::job`
//!
//! Every movies.dat column after `return` is a genre column holding a 0/1 flag.
//! The parse functions work on file content so they can be tested without
//! touching the filesystem; `read_file` is the thin I/O wrapper.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const MOVIES_FILE: &str = "movies.dat";
pub const CAST_FILE: &str = "cast.dat";
pub const CREW_FILE: &str = "crew.dat";

/// Fixed leading columns of movies.dat, in order
const MOVIE_COLUMNS: [&str; 8] = [
    "id",
    "title",
    "release_date",
    "popularity",
    "vote_count",
    "vote_average",
    "revenue",
    "return",
];

const SEPARATOR: &str = "::";

/// Read a whole data file into memory
pub fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

/// Non-empty lines with their 1-based line numbers
fn data_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn parse_error(file: &str, line: usize, reason: String) -> DataLoadError {
    DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason,
    }
}

fn parse_movie_id(file: &str, line: usize, s: &str) -> Result<MovieId> {
    s.trim()
        .parse()
        .map_err(|e| parse_error(file, line, format!("Invalid movieId: {}", e)))
}

/// Parse an optional float. Empty cells are `None`.
fn parse_opt_f64(line: usize, field: &str, s: &str) -> Result<Option<f64>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    s.parse()
        .map(Some)
        .map_err(|e| parse_error(MOVIES_FILE, line, format!("Invalid {}: {}", field, e)))
}

/// Vote counts sometimes come through as floats ("2000.0")
fn parse_vote_count(line: usize, s: &str) -> Result<u32> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(0);
    }
    if let Ok(count) = s.parse::<u32>() {
        return Ok(count);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 => Ok(v as u32),
        _ => Err(parse_error(
            MOVIES_FILE,
            line,
            format!("Invalid vote_count: {}", s),
        )),
    }
}

/// Release dates are coerced: anything that isn't `YYYY-MM-DD` (optionally
/// followed by a time) becomes `None`.
fn parse_release_date(s: &str) -> Option<NaiveDate> {
    let date_part = s.trim().get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn parse_genre_flag(genre: &str, s: &str) -> Result<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "1.0" | "true" => Ok(true),
        "0" | "0.0" | "false" | "" => Ok(false),
        other => Err(DataLoadError::InvalidValue {
            field: format!("genre flag '{}'", genre),
            value: other.to_string(),
        }),
    }
}

/// Parse the movies.dat header and return the genre column names
fn parse_movies_header(header: &str) -> Result<Vec<String>> {
    let columns: Vec<&str> = header.split(SEPARATOR).map(str::trim).collect();
    if columns.len() < MOVIE_COLUMNS.len()
        || columns
            .iter()
            .zip(MOVIE_COLUMNS.iter())
            .any(|(found, expected)| !found.eq_ignore_ascii_case(expected))
    {
        return Err(DataLoadError::MissingHeader {
            file: MOVIES_FILE.to_string(),
        });
    }
    Ok(columns[MOVIE_COLUMNS.len()..]
        .iter()
        .map(|c| c.to_string())
        .collect())
}

/// Parse the content of movies.dat
pub fn parse_movies(content: &str) -> Result<Vec<Movie>> {
    let mut lines = data_lines(content);
    let (_, header) = lines.next().ok_or_else(|| DataLoadError::MissingHeader {
        file: MOVIES_FILE.to_string(),
    })?;
    let genre_columns = parse_movies_header(header)?;
    let expected = MOVIE_COLUMNS.len() + genre_columns.len();

    let mut movies = Vec::new();
    for (line_no, line) in lines {
        let fields: Vec<&str> = line.split(SEPARATOR).collect();
        if fields.len() != expected {
            return Err(DataLoadError::FieldCountMismatch {
                file: MOVIES_FILE.to_string(),
                expected,
                found: fields.len(),
                line: line_no,
            });
        }

        let mut genre_flags = BTreeMap::new();
        for (genre, cell) in genre_columns.iter().zip(&fields[MOVIE_COLUMNS.len()..]) {
            genre_flags.insert(genre.clone(), parse_genre_flag(genre, cell)?);
        }

        movies.push(Movie {
            id: parse_movie_id(MOVIES_FILE, line_no, fields[0])?,
            title: fields[1].trim().to_string(),
            release_date: parse_release_date(fields[2]),
            popularity: parse_opt_f64(line_no, "popularity", fields[3])?.unwrap_or(0.0),
            vote_count: parse_vote_count(line_no, fields[4])?,
            vote_average: parse_opt_f64(line_no, "vote_average", fields[5])?.unwrap_or(0.0),
            revenue: parse_opt_f64(line_no, "revenue", fields[6])?,
            return_ratio: parse_opt_f64(line_no, "return", fields[7])?,
            genre_flags,
        });
    }
    Ok(movies)
}

/// Parse the content of cast.dat
pub fn parse_cast(content: &str) -> Result<Vec<CastAppearance>> {
    let mut cast = Vec::new();
    for (line_no, line) in data_lines(content) {
        let mut parts = line.split(SEPARATOR);

        let movie_id = parts
            .next()
            .ok_or_else(|| parse_error(CAST_FILE, line_no, "Missing movieId".to_string()))?;
        let actor_name = parts
            .next()
            .ok_or_else(|| parse_error(CAST_FILE, line_no, "Missing actor name".to_string()))?;

        cast.push(CastAppearance {
            movie_id: parse_movie_id(CAST_FILE, line_no, movie_id)?,
            actor_name: actor_name.trim().to_string(),
        });
    }
    Ok(cast)
}

/// Parse the content of crew.dat
pub fn parse_crew(content: &str) -> Result<Vec<CrewAppearance>> {
    let mut crew = Vec::new();
    for (line_no, line) in data_lines(content) {
        let mut parts = line.split(SEPARATOR);

        let movie_id = parts
            .next()
            .ok_or_else(|| parse_error(CREW_FILE, line_no, "Missing movieId".to_string()))?;
        let person_name = parts
            .next()
            .ok_or_else(|| parse_error(CREW_FILE, line_no, "Missing person name".to_string()))?;
        let job = parts
            .next()
            .ok_or_else(|| parse_error(CREW_FILE, line_no, "Missing job".to_string()))?;

        crew.push(CrewAppearance {
            movie_id: parse_movie_id(CREW_FILE, line_no, movie_id)?,
            person_name: person_name.trim().to_string(),
            job: job.trim().to_string(),
        });
    }
    Ok(crew)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOVIES: &str = "\
id::title::release_date::popularity::vote_count::vote_average::revenue::return::Action::Comedy
1::Toy Story::1995-10-30::21.9::5415::7.7::373554033::12.45::0::1

2::Heat::1995-12-15 00:00:00::17.9::1886.0::7.7::187436818::3.12::1::0
3::Lost Reel::::0.5::::::::::0::0
";

    #[test]
    fn test_parse_movies() {
        let movies = parse_movies(MOVIES).unwrap();
        assert_eq!(movies.len(), 3);

        let toy_story = &movies[0];
        assert_eq!(toy_story.id, 1);
        assert_eq!(toy_story.title, "Toy Story");
        assert_eq!(
            toy_story.release_date,
            NaiveDate::from_ymd_opt(1995, 10, 30)
        );
        assert_eq!(toy_story.vote_count, 5415);
        assert_eq!(toy_story.return_ratio, Some(12.45));
        assert!(toy_story.has_genre("Comedy"));
        assert!(!toy_story.has_genre("Action"));

        // Timestamp suffix and float vote count are accepted
        assert_eq!(movies[1].release_date, NaiveDate::from_ymd_opt(1995, 12, 15));
        assert_eq!(movies[1].vote_count, 1886);
    }

    #[test]
    fn test_missing_values_are_tolerated() {
        let movies = parse_movies(MOVIES).unwrap();
        let lost = &movies[2];
        assert_eq!(lost.release_date, None);
        assert_eq!(lost.vote_count, 0);
        assert_eq!(lost.revenue, None);
        assert_eq!(lost.return_ratio, None);
        assert_eq!(lost.genre_flags.len(), 2);
    }

    #[test]
    fn test_unparseable_date_becomes_none() {
        assert_eq!(parse_release_date("not a date"), None);
        assert_eq!(parse_release_date("1995-13-40"), None);
        assert_eq!(parse_release_date(""), None);
    }

    #[test]
    fn test_header_required() {
        let err = parse_movies("1::Toy Story::1995-10-30::1::1::1::1::1\n").unwrap_err();
        assert!(matches!(err, DataLoadError::MissingHeader { .. }));

        let err = parse_movies("").unwrap_err();
        assert!(matches!(err, DataLoadError::MissingHeader { .. }));
    }

    #[test]
    fn test_field_count_mismatch() {
        let content = "\
id::title::release_date::popularity::vote_count::vote_average::revenue::return::Action
1::Toy Story::1995-10-30::21.9::5415::7.7::373554033::12.45
";
        let err = parse_movies(content).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::FieldCountMismatch { expected: 9, found: 8, line: 2, .. }
        ));
    }

    #[test]
    fn test_invalid_genre_flag() {
        let content = "\
id::title::release_date::popularity::vote_count::vote_average::revenue::return::Action
1::Toy Story::1995-10-30::21.9::5415::7.7::373554033::12.45::maybe
";
        assert!(matches!(
            parse_movies(content).unwrap_err(),
            DataLoadError::InvalidValue { .. }
        ));
    }

    #[test]
    fn test_parse_cast_and_crew() {
        let cast = parse_cast("1::Tom Hanks\n1:: Tim Allen \n\n2::Al Pacino\n").unwrap();
        assert_eq!(cast.len(), 3);
        assert_eq!(cast[1].actor_name, "Tim Allen");

        let crew = parse_crew("1::John Lasseter::Director\n2::Michael Mann::Director\n").unwrap();
        assert_eq!(crew.len(), 2);
        assert_eq!(crew[1].person_name, "Michael Mann");
        assert_eq!(crew[1].job, "Director");

        let err = parse_crew("1::John Lasseter\n").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { line: 1, .. }));

        let err = parse_cast("x::Tom Hanks\n").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { .. }));
    }
}
