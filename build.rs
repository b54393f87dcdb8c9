// Checks the shape of the embedded data tables so a broken edit fails the
// build instead of the first `expect` at runtime. Field-level validation
// happens again in the parsers.

const SETTINGS: &str = "src/default_settings.toml";
const ROMAN: &str = "src/translit/default_roman.toml";
const PHONETICS: &str = "src/phonetic/default_phonetics.toml";

const PHONETIC_COLUMNS: &[&str] = &[
    "char",
    "roman",
    "vowel",
    "consonant",
    "independent",
    "aspirated",
    "voiced",
    "nasal",
    "velar",
    "palatal",
    "retroflex",
    "dental",
    "labial",
];

fn main() {
    for path in [SETTINGS, ROMAN, PHONETICS] {
        println!("cargo:rerun-if-changed={path}");
    }

    let settings = parse(SETTINGS, include_str!("src/default_settings.toml"));
    require_tables(SETTINGS, &settings, &["distance", "candidates"]);

    let roman = parse(ROMAN, include_str!("src/translit/default_roman.toml"));
    require_tables(ROMAN, &roman, &["vowels", "digraphs", "consonants", "nasal"]);

    let phonetics = parse(PHONETICS, include_str!("src/phonetic/default_phonetics.toml"));
    check_rows(&phonetics);
}

fn parse(path: &str, content: &str) -> toml::Table {
    match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    }
}

fn require_tables(path: &str, doc: &toml::Table, names: &[&str]) {
    for name in names {
        if !doc.get(*name).is_some_and(toml::Value::is_table) {
            panic!("{path} is missing the [{name}] table");
        }
    }
}

fn check_rows(doc: &toml::Table) {
    let Some(rows) = doc.get("rows").and_then(toml::Value::as_array) else {
        panic!("{PHONETICS} must define a `rows` array");
    };
    for (i, row) in rows.iter().enumerate() {
        let Some(row) = row.as_table() else {
            panic!("{PHONETICS}: row {i} is not a table");
        };
        for column in PHONETIC_COLUMNS {
            if !row.contains_key(*column) {
                panic!("{PHONETICS}: row {i} is missing `{column}`");
            }
        }
    }
}
