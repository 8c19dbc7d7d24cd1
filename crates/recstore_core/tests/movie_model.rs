use recstore_core::{Movie, MoviePatch, RecordStore, ValidationError};

#[test]
fn new_movie_defaults_genres_and_ratings_to_empty() {
    let movie = Movie::new("The Start", 2020);

    assert!(movie.genres.is_empty());
    assert!(movie.ratings.is_empty());
    assert_eq!(movie.average_rating(), None);
}

#[test]
fn add_rating_accepts_the_closed_range_bounds() {
    let mut movie = Movie::new("The Start", 2020);

    movie.add_rating(0.0).unwrap();
    movie.add_rating(10.0).unwrap();
    movie.add_rating(7.5).unwrap();

    assert_eq!(movie.ratings, vec![0.0, 10.0, 7.5]);
}

#[test]
fn add_rating_rejects_out_of_range_values_at_assignment() {
    let mut movie = Movie::new("The Start", 2020);

    let err = movie.add_rating(10.5).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::OutOfRange { field: "rating", .. }
    ));
    assert!(movie.add_rating(-0.1).is_err());
    assert!(movie.add_rating(f64::NAN).is_err());
    assert!(movie.add_rating(f64::INFINITY).is_err());

    // Rejected values must not be recorded.
    assert!(movie.ratings.is_empty());
}

#[test]
fn average_rating_is_computed_on_demand() {
    let mut movie = Movie::new("Quiet Night", 2018);
    movie.add_rating(8.0).unwrap();
    movie.add_rating(9.0).unwrap();

    assert_eq!(movie.average_rating(), Some(8.5));

    // No cached value: a new rating changes the next read.
    movie.add_rating(4.0).unwrap();
    assert_eq!(movie.average_rating(), Some(7.0));
}

#[test]
fn movie_patch_merges_public_fields_and_keeps_ratings() {
    let mut store = RecordStore::new();
    let mut movie = Movie::new("The Start", 2020).with_genres(vec!["Action".to_string()]);
    movie.add_rating(8.0).unwrap();
    let id = store.create(movie).id;

    let updated = store
        .update(
            id,
            MoviePatch {
                title: Some("The New Start".to_string()),
                ..MoviePatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.title, "The New Start");
    assert_eq!(updated.year, 2020);
    assert_eq!(updated.genres, vec!["Action".to_string()]);
    assert_eq!(updated.ratings, vec![8.0]);
}

#[test]
fn movie_store_round_trips_ratings_through_json() {
    let mut store = RecordStore::new();
    let mut movie = Movie::new("The Start", 2020);
    movie.add_rating(8.0).unwrap();
    movie.add_rating(9.0).unwrap();
    store.create(movie);

    let snapshot = store.export_json().unwrap();
    let mut reloaded: RecordStore<Movie> = RecordStore::new();
    reloaded.import_json(&snapshot).unwrap();

    assert_eq!(reloaded.records(), store.records());
    assert_eq!(reloaded.get(1).unwrap().average_rating(), Some(8.5));
}
