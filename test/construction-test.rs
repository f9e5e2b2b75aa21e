// Builds polygons from the input files alongside this test.
use polygen::*;
use std::path::Path;

fn build(file: &str) -> Result<Polygon2> {
    let src = Batch::open(Path::new("test").join(file))?;
    PolygonGenerator::new().build(src)
}

#[test]
fn square_file() {
    let p = build("square.txt").unwrap();
    assert!(p.is_complete());
    assert_eq!(p.len(), 4);
    assert_eq!(p.area(), 1.0);

    assert_eq!(
        Report::new(&p).to_string(),
        "Polygon with 4 angles has area 1.0\n\
         List of points in order:\n\
         (0.0;0.0)\n\
         (1.0;0.0)\n\
         (1.0;1.0)\n\
         (0.0;1.0)\n\
         \n\n"
    );
}

// 4 x 4 square with a 2 x 2 notch out of the right hand side, closed by end of file.
#[test]
fn concave_file() {
    let p = build("concave.txt").unwrap();
    assert!(p.is_complete());
    assert_eq!(p.len(), 8);
    assert_eq!(p.area(), 12.0);
    assert_eq!(p.last_vertex(), p.first_vertex());
}

#[test]
fn bowtie_file_aborts() {
    match build("bowtie.txt") {
        Err(Error::Polygon(PolygonError::Intersection { proposed, existing })) => {
            assert_eq!((proposed, existing), (3, 0));
        }
        x => panic!("expected an intersection, got {x:?}"),
    }
}

#[test]
fn malformed_file_aborts() {
    match build("malformed.txt") {
        Err(Error::MalformedCoordinates(line)) => assert_eq!(line, "3 three"),
        x => panic!("expected malformed coordinates, got {x:?}"),
    }
}

#[test]
fn missing_file() {
    assert!(matches!(build("nope.txt"), Err(Error::MissingInput(_))));
    assert!(matches!(Batch::open(""), Err(Error::MissingInput(_))));
}

#[test]
fn interactive_session() {
    let typed = "1 0\n1 0\n1 1\n0.5 -1\n1 1\n0 1\n\n";
    let mut src = Interactive::new(typed.as_bytes(), Vec::new());
    src.intro().unwrap();
    let p = PolygonGenerator::new().build(&mut src).unwrap();

    assert!(p.is_complete());
    assert_eq!(p.area(), 1.0);

    let out = String::from_utf8(src.into_output()).unwrap();
    assert!(out.starts_with("When polygon will be complete"));
    // "1 1" after the rejected "0.5 -1" repeats the current point
    assert_eq!(out.matches("x y:").count(), 7);
}

#[cfg(feature = "io")]
#[test]
fn reports_are_stored_newest_first() {
    use polygen::io::ReportStore;

    let dir = tempfile::tempdir().unwrap();
    let store = ReportStore::new(dir.path().join("area_results.dat"));

    let square = Report::new(&build("square.txt").unwrap()).to_string();
    let concave = Report::new(&build("concave.txt").unwrap()).to_string();
    store.prepend(&square).unwrap();
    store.prepend(&concave).unwrap();

    let history = store.read().unwrap();
    assert_eq!(history, format!("{concave}{square}"));
    assert!(history.starts_with("Polygon with 8 angles has area 12.0\n"));
}
