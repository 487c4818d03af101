use std::sync::Arc;

use arrow::array::{BooleanArray, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

const FIRST_YEAR: i64 = 1927;
const LAST_YEAR: i64 = 2023;

const CATEGORIES: [&str; 6] = [
    "ACTOR IN A LEADING ROLE",
    "ACTRESS IN A LEADING ROLE",
    "DIRECTING",
    "BEST PICTURE",
    "CINEMATOGRAPHY",
    "HONORARY AWARD",
];

const FIRST_NAMES: [&str; 12] = [
    "Ada", "Bruno", "Clara", "Dev", "Elena", "Farid", "Greta", "Hugo", "Ines", "Jonas", "Kiri",
    "Luis",
];
const LAST_NAMES: [&str; 10] = [
    "Almeida", "Brandt", "Castell", "Duarte", "Eklund", "Fontaine", "Grau", "Halvorsen", "Ibsen",
    "Jovanovic",
];
const TITLE_WORDS: [&str; 14] = [
    "Silent", "River", "Night", "Crown", "Harbor", "Glass", "Winter", "Empire", "Letters",
    "Garden", "Stranger", "Horizon", "Mirror", "Dust",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }
}

#[derive(Debug, Serialize)]
struct Row {
    year_film: i64,
    year_ceremony: i64,
    ceremony: i64,
    category: String,
    name: Option<String>,
    film: Option<String>,
    winner: bool,
}

fn film_title(rng: &mut SimpleRng) -> String {
    format!("The {} {}", rng.pick(&TITLE_WORDS), rng.pick(&TITLE_WORDS))
}

fn person(rng: &mut SimpleRng) -> String {
    // A small name pool so nominees recur across years.
    format!("{} {}", rng.pick(&FIRST_NAMES[..8]), rng.pick(&LAST_NAMES[..6]))
}

fn generate(rng: &mut SimpleRng) -> Vec<Row> {
    let mut rows = Vec::new();
    for year in FIRST_YEAR..=LAST_YEAR {
        let ceremony = year - FIRST_YEAR + 1;
        for &category in &CATEGORIES {
            let nominees = if category == "HONORARY AWARD" { 1 } else { 5 };
            let winner = rng.below(nominees);
            for slot in 0..nominees {
                let (name, film) = match category {
                    "BEST PICTURE" => (None, Some(film_title(rng))),
                    "HONORARY AWARD" => (Some(person(rng)), None),
                    _ => (Some(person(rng)), Some(film_title(rng))),
                };
                rows.push(Row {
                    year_film: year,
                    year_ceremony: year + 1,
                    ceremony,
                    category: category.to_string(),
                    name,
                    film,
                    winner: slot == winner,
                });
            }
        }
    }
    rows
}

fn write_csv(path: &str, rows: &[Row]) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create CSV file");
    for row in rows {
        writer.serialize(row).expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV file");
}

fn write_parquet(path: &str, rows: &[Row]) {
    let schema = Arc::new(Schema::new(vec![
        Field::new("year_film", DataType::Int64, false),
        Field::new("year_ceremony", DataType::Int64, false),
        Field::new("ceremony", DataType::Int64, false),
        Field::new("category", DataType::Utf8, false),
        Field::new("name", DataType::Utf8, true),
        Field::new("film", DataType::Utf8, true),
        Field::new("winner", DataType::Boolean, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.year_film))),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.year_ceremony))),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.ceremony))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.category.as_str()))),
            Arc::new(rows.iter().map(|r| r.name.as_deref()).collect::<StringArray>()),
            Arc::new(rows.iter().map(|r| r.film.as_deref()).collect::<StringArray>()),
            Arc::new(rows.iter().map(|r| Some(r.winner)).collect::<BooleanArray>()),
        ],
    )
    .expect("Failed to create RecordBatch");

    let file = std::fs::File::create(path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let rows = generate(&mut rng);

    write_csv("oscars_data.csv", &rows);
    write_parquet("oscars_data.parquet", &rows);

    println!(
        "Wrote {} nominations ({}-{}, {} categories) to oscars_data.csv and oscars_data.parquet",
        rows.len(),
        FIRST_YEAR,
        LAST_YEAR,
        CATEGORIES.len()
    );
}
