//! Test fixture: builds an on-disk `countries` table in a temp dir.

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// (name, english_name, region, capital, population, area, density, percentage, borders)
pub type Row = (
    &'static str,
    &'static str,
    &'static str,
    Option<&'static str>,
    Option<i64>,
    Option<f64>,
    Option<f64>,
    Option<f64>,
    Option<&'static str>,
);

pub const ROWS: &[Row] = &[
    (
        "Франция",
        "France",
        "Западная Европа",
        Some("Париж"),
        Some(68_000_000),
        Some(551_695.0),
        Some(123.3),
        Some(9.14),
        Some("Бельгия, Германия, Испания, Италия"),
    ),
    (
        "Германия",
        "Germany",
        "Западная Европа",
        Some("Берлин"),
        Some(84_000_000),
        Some(357_588.0),
        Some(235.0),
        Some(11.29),
        Some("Франция, Польша, Австрия"),
    ),
    (
        "Бельгия",
        "Belgium",
        "Западная Европа",
        Some("Брюссель"),
        Some(11_700_000),
        Some(30_528.0),
        Some(383.3),
        Some(1.57),
        Some("Франция, Германия, Нидерланды"),
    ),
    (
        "Польша",
        "Poland",
        "Восточная Европа",
        Some("Варшава"),
        Some(37_600_000),
        Some(312_696.0),
        Some(120.2),
        Some(5.05),
        Some("Германия, Чехия, Словакия"),
    ),
    (
        "Норвегия",
        "Norway",
        "Северная Европа",
        Some("Осло"),
        Some(5_500_000),
        Some(385_207.0),
        Some(14.3),
        Some(0.74),
        Some("Швеция, Финляндия, Россия"),
    ),
    (
        "Мальта",
        "Malta",
        "Южная Европа",
        Some("Валлетта"),
        Some(535_000),
        Some(316.0),
        Some(1693.0),
        Some(0.07),
        None,
    ),
    ("Ватикан", "Vatican", "Южная Европа", None, Some(800), Some(0.44), None, None, Some("Италия")),
];

/// Temp database holding [`ROWS`]; the directory lives as long as the fixture.
pub struct Fixture {
    _dir: TempDir,
    pub database_url: String,
}

async fn open_writable(path: &std::path::Path) -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    SqlitePool::connect_with(options)
        .await
        .expect("Failed to open fixture database")
}

/// Creates a database with the `countries` table filled with [`ROWS`].
pub async fn seeded() -> Fixture {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("countries.db");
    let pool = open_writable(&path).await;

    sqlx::query(
        r#"
        CREATE TABLE countries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            english_name TEXT NOT NULL UNIQUE,
            region TEXT NOT NULL,
            capital TEXT,
            population INTEGER,
            area REAL,
            density REAL,
            percentage REAL,
            borders TEXT
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create table");

    for row in ROWS {
        sqlx::query(
            "INSERT INTO countries (name, english_name, region, capital, population,
                 area, density, percentage, borders)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(row.0)
        .bind(row.1)
        .bind(row.2)
        .bind(row.3)
        .bind(row.4)
        .bind(row.5)
        .bind(row.6)
        .bind(row.7)
        .bind(row.8)
        .execute(&pool)
        .await
        .expect("Failed to insert country");
    }

    pool.close().await;

    Fixture {
        database_url: path.display().to_string(),
        _dir: dir,
    }
}

/// Creates a database file without the `countries` table.
pub async fn without_table() -> Fixture {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.db");
    let pool = open_writable(&path).await;

    sqlx::query("CREATE TABLE unrelated (id INTEGER)")
        .execute(&pool)
        .await
        .expect("Failed to create table");
    pool.close().await;

    Fixture {
        database_url: path.display().to_string(),
        _dir: dir,
    }
}

/// Creates a `countries` table whose numeric columns are declared INTEGER and NUMERIC,
/// holding France with whole-number area and density and a NULL percentage.
pub async fn with_integer_columns() -> Fixture {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("integer.db");
    let pool = open_writable(&path).await;

    sqlx::query(
        r#"
        CREATE TABLE countries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            english_name TEXT NOT NULL UNIQUE,
            region TEXT NOT NULL,
            capital TEXT,
            population INTEGER,
            area INTEGER,
            density NUMERIC,
            percentage NUMERIC,
            borders TEXT
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create table");

    sqlx::query(
        "INSERT INTO countries
            (name, english_name, region, capital, population, area, density, percentage, borders)
         VALUES ('Франция', 'France', 'Западная Европа', 'Париж',
                 68000000, 551695, 123, NULL, NULL)",
    )
    .execute(&pool)
    .await
    .expect("Failed to insert country");
    pool.close().await;

    Fixture {
        database_url: path.display().to_string(),
        _dir: dir,
    }
}
