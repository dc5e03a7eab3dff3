//! Static snapshot documents used across harnesses.
//!
//! Shapes follow the knowledge-store exports: catalog records carry
//! `entityUri` / `entityLabel` / `count` / `source`, retrieval rows carry
//! `$`-packed `authors` and `matchedEntities`.

pub const WHEAT: &str = "http://purl.obolibrary.org/obo/NCBITaxon_4565";
pub const DURUM: &str = "http://purl.obolibrary.org/obo/NCBITaxon_4567";
pub const HEIGHT: &str = "http://opendata.inrae.fr/wto/0000011";
pub const YIELD: &str = "http://opendata.inrae.fr/wto/0000005";
pub const GENE: &str = "http://example.org/gene/TaMYB10";

/// Organism snapshot, counts exported as strings.
pub const CATALOG_TAXON_JSON: &str = r#"[
  {"entityUri": "http://purl.obolibrary.org/obo/NCBITaxon_4565", "entityLabel": "Triticum aestivum", "count": "41", "entityType": "Taxon"},
  {"entityUri": "http://purl.obolibrary.org/obo/NCBITaxon_4565", "entityLabel": "bread wheat", "entityPrefLabel": "Triticum aestivum", "count": "41", "entityType": "Taxon"},
  {"entityUri": "http://purl.obolibrary.org/obo/NCBITaxon_4567", "entityLabel": "Triticum durum", "count": "7", "entityType": "Taxon"}
]"#;

/// Trait snapshot plus one concept from a vocabulary with no query strategy.
pub const CATALOG_TRAIT_JSON: &str = r#"[
  {"entityUri": "http://opendata.inrae.fr/wto/0000011", "entityLabel": "plant height", "count": 12, "source": "Phenotype or trait"},
  {"entityUri": "http://opendata.inrae.fr/wto/0000005", "entityLabel": "grain yield", "count": 30, "source": "Phenotype or trait"},
  {"entityUri": "http://example.org/gene/TaMYB10", "entityLabel": "TaMYB10", "count": 2, "source": "Gene"}
]"#;

/// Retrieval rows per concept. `doc/1` and `doc/2` carry both wheat and
/// height; `doc/3` only wheat; `doc/4` only height.
pub const RETRIEVAL_JSON: &str = r#"{
  "http://purl.obolibrary.org/obo/NCBITaxon_4565": [
    {"document": "http://data-issa.cirad.fr/document/1", "title": "Dwarfing genes in bread wheat", "date": "2019",
     "authors": "Rival, Alain$Doe, Jane", "matchedEntities": "http://purl.obolibrary.org/obo/NCBITaxon_4565$Triticum aestivum"},
    {"document": "http://data-issa.cirad.fr/document/3", "title": "Wheat rust", "date": "2020",
     "authors": "Smith, K", "matchedEntities": "http://purl.obolibrary.org/obo/NCBITaxon_4565$Triticum aestivum"},
    {"document": "http://data-issa.cirad.fr/document/2", "title": "Height QTLs", "date": "2021",
     "authors": "Lee, M", "matchedEntities": "http://purl.obolibrary.org/obo/NCBITaxon_4567$Triticum durum"}
  ],
  "http://opendata.inrae.fr/wto/0000011": [
    {"document": "http://data-issa.cirad.fr/document/2", "title": "Height QTLs", "date": "2021",
     "authors": "Lee, M", "matchedEntities": "http://opendata.inrae.fr/wto/0000011$plant height"},
    {"document": "http://data-issa.cirad.fr/document/4", "title": "Stem elongation", "date": "2018",
     "authors": "", "matchedEntities": "http://opendata.inrae.fr/wto/0000011$plant height"},
    {"document": "http://data-issa.cirad.fr/document/1", "title": "Dwarfing genes in bread wheat", "date": "2019",
     "authors": "Rival, Alain$Doe, Jane", "matchedEntities": "http://opendata.inrae.fr/wto/0000011$plant height$$http://opendata.inrae.fr/wto/0000012$stem length"}
  ]
}"#;

/// Write `contents` to a fresh temp file and return its handle.
pub fn temp_json(contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}
