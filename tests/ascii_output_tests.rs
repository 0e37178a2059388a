//! Text database output tests

mod common;

use common::builders::{single_sphere_deck, DeckBuilder};
use comgeom::{AsciiDatabase, ComGeomReader, ConversionConfiguration, Dialect};

fn dump(deck: &str, config: ConversionConfiguration) -> String {
    let mut buf = Vec::new();
    {
        let mut db = AsciiDatabase::new(&mut buf);
        ComGeomReader::from_reader(deck.as_bytes())
            .with_configuration(config)
            .convert(&mut db)
            .unwrap();
    }
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_single_sphere_dump() {
    let out = dump(&single_sphere_deck(100), ConversionConfiguration::default());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "title {single sphere}",
            "units in",
            "put {s1} sph V {0.0 0.0 0.0} r 1.0",
            "put {r1} comb region yes id 100 air 0 material 1 los 100 members {{u s1}}",
            "put {g1} comb region no members {{u r1}}",
            "put {all} comb region no members {{u g1}}",
        ]
    );
}

#[test]
fn test_clauses_precede_their_region() {
    let deck = DeckBuilder::new(Dialect::Dynamic)
        .title("cm", "clauses")
        .control(2, 0)
        .sphere(0.0)
        .sphere(3.0)
        .end()
        .region(1, &[("", 1), ("or", -2)])
        .end()
        .ident(1, 0, 0, 1, 100)
        .build();
    let out = dump(&deck, ConversionConfiguration::new(Dialect::Dynamic).with_suffix(".x"));

    let clause1 = out.find("put {r1c1.x}").unwrap();
    let clause2 = out.find("put {r1c2.x}").unwrap();
    let region = out.find("put {r1.x} comb region yes").unwrap();
    assert!(clause1 < region && clause2 < region);
    assert!(out.contains("units cm"));
    assert!(out.contains("put {g00.x} comb region no members {{u r1.x}}"));
}

#[test]
fn test_failed_solid_is_not_dumped() {
    let deck = DeckBuilder::new(Dialect::V5)
        .title("in", "bad")
        .control(2, 1)
        .solid("tor", &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 2.0])
        .sphere(0.0)
        .end()
        .region(1, &[("", 2)])
        .end()
        .ident(1, 100, 0, 1, 100)
        .build();
    let out = dump(&deck, ConversionConfiguration::default());

    assert!(!out.contains("put {s1}"));
    assert!(out.contains("put {s2} sph"));
}
