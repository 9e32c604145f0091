use std::collections::BTreeMap;
use std::io::prelude::*;

const DICTIONARY: &str = include_str!("src/dictionary.txt");

// Keep in sync with `wordle::MIN_LEN` and `wordle::MAX_LEN`.
const MIN_LEN: usize = 3;
const MAX_LEN: usize = 6;

fn main() {
    println!("cargo:rerun-if-changed=src/dictionary.txt");

    let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let mut f = std::fs::File::create(out_dir.join("dictionary.rs"))
        .expect("could not create file in OUT_DIR");

    let mut words: BTreeMap<u8, Vec<String>> = BTreeMap::new();
    for line in DICTIONARY.lines() {
        let word = line.trim();
        if !(MIN_LEN..=MAX_LEN).contains(&word.len())
            || !word.bytes().all(|c| c.is_ascii_alphabetic())
        {
            continue;
        }
        words
            .entry(word.len() as u8)
            .or_default()
            .push(word.to_ascii_lowercase());
    }

    let mut map = phf_codegen::Map::new();
    for (len, bucket) in &words {
        let entries: Vec<_> = bucket.iter().map(|w| format!("{:?}", w)).collect();
        map.entry(
            *len,
            &format!("&[{}] as &'static [&'static str]", entries.join(", ")),
        );
    }

    writeln!(
        f,
        "static BUNDLED_WORDS: phf::Map<u8, &'static [&'static str]> = {};",
        map.build()
    )
    .unwrap();
}
