//! Integration tests for the query engine.
//!
//! These tests run every query family against one shared catalog and check
//! properties that hold across calls rather than single hand-picked values.

use chrono::{Datelike, NaiveDate};
use data_loader::{CastAppearance, Catalog, CrewAppearance, Movie};
use queries::{QueryEngine, QueryError, MONTH_NAMES, WEEKDAY_NAMES};
use std::sync::Arc;

fn create_test_catalog() -> Arc<Catalog> {
    let titles = [
        "Toy Story",
        "Heat",
        "Jumanji",
        "GoldenEye",
        "Balto",
        "Casino",
        "Sabrina",
        "Cutthroat Island",
        "Money Train",
        "Babe",
    ];

    let mut movies = Vec::new();
    for (i, &title) in titles.iter().enumerate() {
        let id = i as u32 + 1;
        let mut movie = Movie::new(id, title);
        // Every third movie has no release date
        if id % 3 != 0 {
            movie = movie.released(NaiveDate::from_ymd_opt(1995, id, 3 * id).unwrap());
        }
        movie.vote_count = 1000 * id;
        movie.revenue = Some(10.0 * id as f64);
        movie.return_ratio = Some(id as f64 / 4.0);
        movies.push(movie);
    }

    let cast = vec![
        CastAppearance { movie_id: 1, actor_name: "Tom Hanks".to_string() },
        CastAppearance { movie_id: 7, actor_name: "Harrison Ford".to_string() },
        CastAppearance { movie_id: 2, actor_name: "Al Pacino".to_string() },
        CastAppearance { movie_id: 6, actor_name: "Al Pacino".to_string() },
    ];
    let crew = vec![
        CrewAppearance {
            movie_id: 2,
            person_name: "Michael Mann".to_string(),
            job: "Director".to_string(),
        },
        CrewAppearance {
            movie_id: 6,
            person_name: "Martin Scorsese".to_string(),
            job: "Director".to_string(),
        },
        CrewAppearance {
            movie_id: 2,
            person_name: "Martin Scorsese".to_string(),
            job: "Producer".to_string(),
        },
    ];
    Arc::new(Catalog::new(movies, cast, crew).unwrap())
}

fn dated_movies(catalog: &Catalog) -> usize {
    catalog.movies().iter().filter(|m| m.release_date.is_some()).count()
}

#[test]
fn test_month_counts_match_release_dates() {
    let catalog = create_test_catalog();
    let engine = QueryEngine::new(catalog.clone());

    for (i, month) in MONTH_NAMES.iter().enumerate() {
        let expected = catalog
            .movies()
            .iter()
            .filter(|m| m.release_date.map(|d| d.month()) == Some(i as u32 + 1))
            .count();
        assert_eq!(engine.count_by_release_month(month).unwrap(), expected);
    }

    let total: usize = MONTH_NAMES
        .iter()
        .map(|m| engine.count_by_release_month(m).unwrap())
        .sum();
    assert_eq!(total, dated_movies(&catalog));
}

#[test]
fn test_weekday_counts_partition_dated_movies() {
    let catalog = create_test_catalog();
    let engine = QueryEngine::new(catalog.clone());

    let total: usize = WEEKDAY_NAMES
        .iter()
        .map(|d| engine.count_by_release_weekday(d).unwrap())
        .sum();
    assert_eq!(total, dated_movies(&catalog));
}

#[test]
fn test_unknown_calendar_names() {
    let engine = QueryEngine::new(create_test_catalog());
    assert!(matches!(
        engine.count_by_release_month("march"),
        Err(QueryError::InvalidArgument { .. })
    ));
    assert!(matches!(
        engine.count_by_release_weekday("monday"),
        Err(QueryError::InvalidArgument { .. })
    ));
}

#[test]
fn test_vote_boundary() {
    let mut movies = vec![Movie::new(1, "Below"), Movie::new(2, "At")];
    movies[0].vote_count = 1999;
    movies[1].vote_count = 2000;
    let engine = QueryEngine::new(Arc::new(Catalog::new(movies, vec![], vec![]).unwrap()));

    assert!(matches!(
        engine.votes_for_title("below"),
        Err(QueryError::Ineligible { vote_count: 1999, .. })
    ));
    assert_eq!(engine.votes_for_title("at").unwrap().vote_count, 2000);
}

#[test]
fn test_people_queries_on_shared_catalog() {
    let engine = QueryEngine::new(create_test_catalog());

    let hanks = engine.actor_summary("tom hanks").unwrap();
    assert_eq!(hanks.movie_count, 1);
    assert_eq!(hanks.total_revenue, 10.0);

    let pacino = engine.actor_summary("Al Pacino").unwrap();
    assert_eq!(pacino.movie_count, 2);
    assert_eq!(pacino.total_revenue, 80.0);
    assert_eq!(pacino.average_revenue_per_movie, 40.0);

    let mann = engine.director_summary("Michael Mann").unwrap();
    assert_eq!(mann.movie_count, 1);
    assert_eq!(mann.total_return, 0.5);
    assert_eq!(mann.average_return_per_movie, 0.5);

    // The producer credit on Heat does not count towards directing
    let scorsese = engine.director_summary("martin scorsese").unwrap();
    assert_eq!(scorsese.movie_count, 1);
    assert_eq!(scorsese.total_return, 1.5);
}

#[test]
fn test_queries_repeat_identically() {
    let engine = QueryEngine::new(create_test_catalog());
    let first = (
        engine.count_by_release_month("marzo"),
        engine.score_for_title("Heat"),
        engine.votes_for_title("Babe"),
        engine.director_summary("Martin Scorsese"),
    );
    for _ in 0..20 {
        let again = (
            engine.count_by_release_month("marzo"),
            engine.score_for_title("Heat"),
            engine.votes_for_title("Babe"),
            engine.director_summary("Martin Scorsese"),
        );
        assert_eq!(again, first);
    }
}
