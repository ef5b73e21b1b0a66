use movie_core::db::open_db_in_memory;
use movie_core::{MovieRecord, MovieRepository, RepoError, SqliteMovieRepository};
use std::collections::HashSet;

#[test]
fn list_returns_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMovieRepository::new(&conn);

    let dune = repo.insert("Dune", 2021, "Sci-Fi").unwrap();
    let amelie = repo.insert("Amelie", 2001, "Romance").unwrap();

    let movies = repo.list_all().unwrap();
    assert_eq!(
        movies,
        vec![
            MovieRecord {
                id: amelie,
                title: "Amelie".to_string(),
                year: 2001,
                genre: "Romance".to_string(),
            },
            MovieRecord {
                id: dune,
                title: "Dune".to_string(),
                year: 2021,
                genre: "Sci-Fi".to_string(),
            },
        ]
    );
}

#[test]
fn list_is_strictly_descending_by_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMovieRepository::new(&conn);

    for year in 1990..2000 {
        repo.insert("Title", year, "Drama").unwrap();
    }
    let doomed = repo.list_all().unwrap()[3].id;
    repo.delete(doomed).unwrap();

    let ids = repo
        .list_all()
        .unwrap()
        .into_iter()
        .map(|movie| movie.id)
        .collect::<Vec<_>>();
    assert_eq!(ids.len(), 9);
    assert!(ids.windows(2).all(|pair| pair[0] > pair[1]));
}

#[test]
fn insert_assigns_unseen_ids_even_after_deletes() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMovieRepository::new(&conn);
    let mut seen = HashSet::new();

    let first = repo.insert("Alien", 1979, "Horror").unwrap();
    let second = repo.insert("Aliens", 1986, "Action").unwrap();
    seen.insert(first);
    seen.insert(second);

    repo.delete(second).unwrap();
    let third = repo.insert("Alien 3", 1992, "Horror").unwrap();
    assert!(seen.insert(third), "id {third} was reused");

    repo.delete_all().unwrap();
    let fourth = repo.insert("Prometheus", 2012, "Sci-Fi").unwrap();
    assert!(seen.insert(fourth), "id {fourth} was reused");
    assert!(fourth > third);
}

#[test]
fn get_by_id_returns_none_for_unknown_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMovieRepository::new(&conn);

    let id = repo.insert("Heat", 1995, "Crime").unwrap();
    assert!(repo.get_by_id(id).unwrap().is_some());
    assert!(repo.get_by_id(id + 1).unwrap().is_none());
    assert!(repo.get_by_id(-1).unwrap().is_none());
}

#[test]
fn update_changes_only_target_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMovieRepository::new(&conn);

    let target = repo.insert("Blade Runer", 1892, "SciFi").unwrap();
    let other = repo.insert("Brazil", 1985, "Satire").unwrap();

    let changed = repo.update(target, "Blade Runner", 1982, "Sci-Fi").unwrap();
    assert!(changed);

    let updated = repo.get_by_id(target).unwrap().unwrap();
    assert_eq!(updated.id, target);
    assert_eq!(updated.title, "Blade Runner");
    assert_eq!(updated.year, 1982);
    assert_eq!(updated.genre, "Sci-Fi");

    let untouched = repo.get_by_id(other).unwrap().unwrap();
    assert_eq!(untouched.title, "Brazil");
    assert_eq!(untouched.year, 1985);
}

#[test]
fn update_unknown_id_is_silent_noop() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMovieRepository::new(&conn);

    let id = repo.insert("Ran", 1985, "Drama").unwrap();
    let before = repo.list_all().unwrap();

    let changed = repo.update(id + 100, "Kagemusha", 1980, "Drama").unwrap();
    assert!(!changed);
    assert_eq!(repo.list_all().unwrap(), before);
}

#[test]
fn repository_does_not_validate() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMovieRepository::new(&conn);

    let id = repo.insert("", -3, "").unwrap();
    let stored = repo.get_by_id(id).unwrap().unwrap();
    assert_eq!(stored.title, "");
    assert_eq!(stored.year, -3);
}

#[test]
fn delete_removes_exactly_one_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMovieRepository::new(&conn);

    let keep = repo.insert("Up", 2009, "Animation").unwrap();
    let gone = repo.insert("Cars", 2006, "Animation").unwrap();

    assert!(repo.delete(gone).unwrap());
    assert!(!repo.delete(gone).unwrap());
    assert!(repo.get_by_id(gone).unwrap().is_none());

    let remaining = repo.list_all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep);
}

#[test]
fn delete_all_empties_table() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMovieRepository::new(&conn);

    repo.insert("Jaws", 1975, "Thriller").unwrap();
    repo.insert("Jaws 2", 1978, "Thriller").unwrap();

    assert_eq!(repo.delete_all().unwrap(), 2);
    assert!(repo.list_all().unwrap().is_empty());
    assert_eq!(repo.delete_all().unwrap(), 0);
}

#[test]
fn unreadable_row_reports_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO movies (title, year, genre) VALUES ('Odd', 'not a year', 'Drama');",
        [],
    )
    .unwrap();
    let repo = SqliteMovieRepository::new(&conn);

    let err = repo.list_all().unwrap_err();
    assert!(
        matches!(err, RepoError::InvalidData(_)),
        "unexpected error: {err}"
    );
    assert!(err.to_string().contains("movies.year"));
}
