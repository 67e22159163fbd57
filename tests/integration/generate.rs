use crate::*;

#[test]
fn valid_source() {
    let dir = tempfile::tempdir().unwrap();
    install_source(dir.path(), "icon.svg");

    let icons = run(config_in(dir.path()));
    assert_eq!(icons.len(), 2);
    assert_eq!(icons[0].path, dir.path().join("icons/icon-192x192.png"));
    assert_eq!(icons[1].path, dir.path().join("icons/icon-512x512.png"));
    icons.iter().for_each(assert_rendered);

    // The badge fills the whole square and its center is the circle.
    let image = load_png(&icons[0].path);
    assert_eq!(image.pixel(96, 60), RGBA8::new(0xe9, 0x45, 0x60, 255));
    assert_eq!(image.pixel(0, 0).a, 0);
}

#[test]
fn missing_source() {
    let dir = tempfile::tempdir().unwrap();

    let icons = run(config_in(dir.path()));
    assert_eq!(icons.len(), 2);
    icons.iter().for_each(assert_placeholder);
    assert!(icons.iter().all(is_read_error));
}

#[test]
fn malformed_source() {
    let dir = tempfile::tempdir().unwrap();
    install_source(dir.path(), "malformed.svg");

    let icons = run(config_in(dir.path()));
    icons.iter().for_each(assert_placeholder);
    assert!(icons.iter().all(|icon| matches!(
        icon.outcome,
        Outcome::Placeholder(RasterError::Svg(usvg::Error::ParsingFailed(_)))
    )));
}

#[test]
fn zero_sized_source() {
    let dir = tempfile::tempdir().unwrap();
    install_source(dir.path(), "invalid-size.svg");

    let icons = run(config_in(dir.path()));
    icons.iter().for_each(assert_placeholder);
}

#[test]
fn compressed_source() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::copy(fixture("icon.svgz"), dir.path().join("icon.svgz")).unwrap();

    let config = config_in(dir.path()).with_source(dir.path().join("icon.svgz"));
    run(config).iter().for_each(assert_rendered);
}

#[test]
fn wide_source_is_centered() {
    let dir = tempfile::tempdir().unwrap();
    install_source(dir.path(), "wide.svg");

    let icons = run(config_in(dir.path()).with_sizes(&[64]));
    let image = load_png(&icons[0].path);
    assert_eq!((image.width, image.height), (64, 64));
    assert_eq!(image.pixel(32, 4).a, 0);
    assert_eq!(image.pixel(32, 32), RGBA8::new(0, 255, 0, 255));
    assert_eq!(image.pixel(32, 60).a, 0);
}

#[test]
fn idempotent() {
    let dir = tempfile::tempdir().unwrap();
    install_source(dir.path(), "icon.svg");

    let icons = run(config_in(dir.path()));
    let first: Vec<_> = icons.iter().map(|i| std::fs::read(&i.path).unwrap()).collect();

    let icons = run(config_in(dir.path()));
    let second: Vec<_> = icons.iter().map(|i| std::fs::read(&i.path).unwrap()).collect();

    assert_eq!(first, second);
}

#[test]
fn placeholder_idempotent() {
    let dir = tempfile::tempdir().unwrap();

    let first = std::fs::read(&run(config_in(dir.path()))[1].path).unwrap();
    let second = std::fs::read(&run(config_in(dir.path()))[1].path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn existing_files_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let icons_dir = dir.path().join("icons");
    std::fs::create_dir(&icons_dir).unwrap();
    std::fs::write(icons_dir.join("favicon.ico"), "ico").unwrap();
    std::fs::write(icons_dir.join("icon-192x192.png"), "stale").unwrap();
    install_source(dir.path(), "icon.svg");

    run(config_in(dir.path())).iter().for_each(assert_rendered);

    assert_eq!(std::fs::read(icons_dir.join("favicon.ico")).unwrap(), b"ico");

    let mut names: Vec<_> = std::fs::read_dir(&icons_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, ["favicon.ico", "icon-192x192.png", "icon-512x512.png"]);
}

#[test]
fn source_fixed_after_failure() {
    let dir = tempfile::tempdir().unwrap();

    run(config_in(dir.path())).iter().for_each(assert_placeholder);

    install_source(dir.path(), "icon.svg");
    run(config_in(dir.path())).iter().for_each(assert_rendered);
}

#[test]
fn manifest_sizes() {
    let dir = tempfile::tempdir().unwrap();
    install_source(dir.path(), "icon.svg");

    let icons = run(config_in(dir.path()).with_sizes(&Config::MANIFEST_SIZES));
    let sizes: Vec<_> = icons.iter().map(|i| i.size).collect();
    assert_eq!(sizes, Config::MANIFEST_SIZES);
    icons.iter().for_each(assert_rendered);
}

#[test]
fn custom_placeholder_color() {
    let dir = tempfile::tempdir().unwrap();
    let color: svgtypes::Color = "#fff".parse().unwrap();

    let icons = run(config_in(dir.path())
        .with_sizes(&[32])
        .with_placeholder_color(color));
    let image = load_png(&icons[0].path);
    assert!(image.is_flat(RGBA8::new(255, 255, 255, 255)));
}

#[test]
fn nested_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path()).with_output_dir(dir.path().join("public/static/icons"));

    let icons = run(config);
    assert!(icons[0].path.starts_with(dir.path().join("public/static/icons")));
    icons.iter().for_each(assert_placeholder);
}

#[test]
fn unwritable_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("icons"), "a file").unwrap();

    let res = Generator::new(config_in(dir.path())).run(|_| {});
    assert!(matches!(res, Err(icongen::Error::CreateDir(..))));
}

#[test]
fn oversized_icon() {
    let dir = tempfile::tempdir().unwrap();
    install_source(dir.path(), "icon.svg");

    let res = Generator::new(config_in(dir.path()).with_sizes(&[192, 100_000])).run(|_| {});
    assert!(matches!(res, Err(icongen::Error::InvalidSize(100_000))));
    assert!(!dir.path().join("icons").exists());
}
