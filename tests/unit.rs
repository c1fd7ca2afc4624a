use pathfinder::{
    AlwaysAccept, And, Candidate, DotDirectoryFilter, FinderError, GlobMatch, IsDirectory, IsFile,
    Not, Or, Predicate, PredicateExt, RegexMatch, SizeFilter,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[derive(Debug)]
struct Failing;

impl Predicate for Failing {
    fn accepts(&self, candidate: &Candidate<'_>) -> Result<bool, FinderError> {
        Err(FinderError::Predicate(format!(
            "refused {}",
            candidate.path().display()
        )))
    }
}

const SAMPLE: [&str; 7] = [
    "dir1",
    "dir2/file6.log",
    "file1.txt",
    "file2.dat",
    ".dir4/file20.txt",
    "dir3/.file9",
    "nothing-here",
];

fn accepts(predicate: &dyn Predicate, path: &str) -> bool {
    predicate.accepts_path(Path::new(path)).unwrap()
}

#[test]
fn test_always_accept() {
    for path in SAMPLE {
        assert!(accepts(&AlwaysAccept, path));
    }
}

#[test]
fn test_directory_and_file() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("sub");
    let file = dir.path().join("file.txt");
    fs::create_dir(&sub).unwrap();
    fs::write(&file, "x").unwrap();
    assert!(IsDirectory.accepts_path(&sub).unwrap());
    assert!(!IsDirectory.accepts_path(&file).unwrap());
    assert!(IsFile.accepts_path(&file).unwrap());
    assert!(!IsFile.accepts_path(&sub).unwrap());
    let missing = dir.path().join("missing");
    assert!(!IsDirectory.accepts_path(&missing).unwrap());
    assert!(!IsFile.accepts_path(&missing).unwrap());
}

#[test]
fn test_regex_anchored_at_start() {
    let prefix = RegexMatch::new("dir").unwrap();
    assert!(accepts(&prefix, "dir2/file6.log"));
    assert!(!accepts(&prefix, "file1.txt"));
    let inner = RegexMatch::new("file").unwrap();
    assert!(!accepts(&inner, "dir2/file6.log"));
    let full = RegexMatch::new("dir2$").unwrap();
    assert!(accepts(&full, "dir2"));
    assert!(!accepts(&full, "dir2/file6.log"));
    assert_eq!(full.pattern(), "dir2$");
}

#[test]
fn test_regex_alternation_stays_anchored() {
    let either = RegexMatch::new("a|file").unwrap();
    assert!(accepts(&either, "file1.txt"));
    assert!(!accepts(&either, "dir2/file6.log"));
}

#[test]
fn test_glob_patterns() {
    let txt = GlobMatch::new("*.txt").unwrap();
    assert!(accepts(&txt, "file1.txt"));
    assert!(accepts(&txt, ".dir4/file20.txt"));
    assert!(!accepts(&txt, "file2.dat"));
    let single = GlobMatch::new("file?.dat").unwrap();
    assert!(accepts(&single, "file2.dat"));
    assert!(!accepts(&single, "file20.dat"));
    let class = GlobMatch::new("file[13].txt").unwrap();
    assert!(accepts(&class, "file1.txt"));
    assert!(!accepts(&class, "file2.txt"));
    let upper = GlobMatch::new("*.TXT").unwrap();
    assert!(!accepts(&upper, "file1.txt"));
    assert_eq!(txt.pattern(), "*.txt");
}

#[test]
fn test_patterns_see_relative_path_only() {
    let candidate = Candidate::new(Path::new("/srv/build2"), Path::new("dir1"));
    let two = RegexMatch::new(".*2.*").unwrap();
    assert!(!two.accepts(&candidate).unwrap());
    let glob = GlobMatch::new("dir1").unwrap();
    assert!(glob.accepts(&candidate).unwrap());
}

#[test]
fn test_invalid_patterns() {
    assert!(matches!(
        RegexMatch::new("("),
        Err(FinderError::InvalidPattern { .. })
    ));
    assert!(matches!(
        GlobMatch::new("file[1"),
        Err(FinderError::InvalidPattern { .. })
    ));
}

#[test]
fn test_empty_combinators() {
    let and = And::default();
    let or = Or::default();
    for path in SAMPLE {
        assert!(accepts(&and, path));
        assert!(!accepts(&or, path));
    }
}

#[test]
fn test_double_negation() {
    let predicates: Vec<Box<dyn Predicate>> = vec![
        Box::new(AlwaysAccept),
        Box::new(RegexMatch::new(".*2.*").unwrap()),
        Box::new(GlobMatch::new("*.txt").unwrap()),
    ];
    for predicate in predicates {
        let expected: Vec<bool> = SAMPLE.iter().map(|p| accepts(&predicate, p)).collect();
        let twice = Not::new(Not::new(predicate));
        let actual: Vec<bool> = SAMPLE.iter().map(|p| accepts(&twice, p)).collect();
        assert_eq!(expected, actual);
    }
}

#[test]
fn test_operators_match_combinators() {
    let fluent = GlobMatch::new("*.txt").unwrap() & RegexMatch::new(".*1.*").unwrap();
    let explicit = And::new(vec![
        Box::new(GlobMatch::new("*.txt").unwrap()),
        Box::new(RegexMatch::new(".*1.*").unwrap()),
    ]);
    for path in SAMPLE {
        assert_eq!(accepts(&fluent, path), accepts(&explicit, path));
    }

    let fluent = GlobMatch::new("*.log").unwrap() | RegexMatch::new("file").unwrap();
    let explicit = Or::new(vec![
        Box::new(GlobMatch::new("*.log").unwrap()),
        Box::new(RegexMatch::new("file").unwrap()),
    ]);
    for path in SAMPLE {
        assert_eq!(accepts(&fluent, path), accepts(&explicit, path));
    }

    let negated = !GlobMatch::new("*.txt").unwrap();
    assert!(!accepts(&negated, "file1.txt"));
    assert!(accepts(&negated, "file2.dat"));
}

#[test]
fn test_chained_operators_extend() {
    let chained = IsFile & GlobMatch::new("*.txt").unwrap() & RegexMatch::new("file").unwrap();
    assert_eq!(chained.children().len(), 3);
    let any = IsFile | IsDirectory | AlwaysAccept;
    assert_eq!(any.children().len(), 3);
}

#[test]
fn test_short_circuit() {
    let and = Not::new(AlwaysAccept) & Failing;
    assert!(!and.accepts_path(Path::new("x")).unwrap());
    let or = AlwaysAccept | Failing;
    assert!(or.accepts_path(Path::new("x")).unwrap());
    let reached = AlwaysAccept & Failing;
    assert!(matches!(
        reached.accepts_path(Path::new("x")),
        Err(FinderError::Predicate(_))
    ));
}

#[test]
fn test_predicate_ext_on_custom_types() {
    let either = Failing.or(AlwaysAccept);
    assert!(either.accepts_path(Path::new("x")).is_err());
    let negated = AlwaysAccept.not();
    assert!(!accepts(&negated, "x"));
    let boxed = GlobMatch::new("*.log").unwrap().boxed();
    assert!(accepts(&boxed, "dir2/file6.log"));
}

#[test]
fn test_dot_directory_filter() {
    let dir = tempdir().unwrap();
    for name in [".dir4", "dir1", "dir1/.hidden", "archive.d"] {
        fs::create_dir_all(dir.path().join(name)).unwrap();
    }
    fs::write(dir.path().join(".file9"), "").unwrap();
    let filter = DotDirectoryFilter::new();
    let check = |relative: &str| {
        filter
            .accepts(&Candidate::new(dir.path(), Path::new(relative)))
            .unwrap()
    };
    assert!(check(".dir4"));
    assert!(check("dir1/.hidden"));
    assert!(!check("dir1"));
    assert!(!check("archive.d"));
    assert!(!check(".file9"));
}

#[test]
fn test_size_filter() {
    let dir = tempdir().unwrap();
    let empty = dir.path().join("empty");
    let small = dir.path().join("small");
    let large = dir.path().join("large");
    fs::write(&empty, "").unwrap();
    fs::write(&small, "0123456789").unwrap();
    fs::write(&large, "x".repeat(100)).unwrap();

    let unbounded = SizeFilter::default();
    for path in [&empty, &small, &large] {
        assert!(unbounded.accepts_path(path).unwrap());
    }
    assert!(!unbounded.accepts_path(dir.path()).unwrap());

    let at_least_one = SizeFilter::new().min_bytes(1);
    assert!(!at_least_one.accepts_path(&empty).unwrap());
    assert!(at_least_one.accepts_path(&small).unwrap());

    let range = SizeFilter::between(10, 50);
    assert!(range.accepts_path(&small).unwrap());
    assert!(!range.accepts_path(&large).unwrap());

    let nothing = SizeFilter::new().max_bytes(0);
    assert!(nothing.accepts_path(&empty).unwrap());
    assert!(!nothing.accepts_path(&small).unwrap());
}
