use std::path::Path;

use crate::generator::codegen::{GeneratedFile, relative_import};

#[test]
fn test_relative_import_same_directory() {
  assert_eq!(relative_import(Path::new("swagger"), Path::new("swagger"), "pet"), "./pet");
  assert_eq!(relative_import(Path::new("./swagger"), Path::new("swagger"), "pet"), "./pet");
}

#[test]
fn test_relative_import_across_directories() {
  assert_eq!(
    relative_import(Path::new("src/api"), Path::new("src/types"), "pet"),
    "../types/pet"
  );
  assert_eq!(relative_import(Path::new("src/types/v1"), Path::new("src"), "pet"), "../../pet");
  assert_eq!(relative_import(Path::new("src"), Path::new("src/types"), "pet"), "./types/pet");
}

#[test]
fn test_relative_import_mixes_absolute_and_relative_directories() {
  let cwd = std::env::current_dir().unwrap();

  assert_eq!(
    relative_import(&cwd.join("src/api"), Path::new("src/types"), "pet"),
    "../types/pet"
  );
  assert_eq!(
    relative_import(Path::new("src/api"), &cwd.join("src/types"), "pet"),
    "../types/pet"
  );
  assert_eq!(relative_import(&cwd.join("src"), Path::new("./src"), "pet"), "./pet");
}

#[test]
fn test_relative_import_between_absolute_directories() {
  assert_eq!(
    relative_import(Path::new("/srv/app/api"), Path::new("/srv/app/types"), "pet"),
    "../types/pet"
  );
}

#[test]
fn test_generated_file_path() {
  let file = GeneratedFile::new(Path::new("out"), "pet", String::new());
  assert_eq!(file.path, Path::new("out").join("pet.ts"));
}
