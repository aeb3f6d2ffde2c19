use fonoteca_config::PATHS;
use fonoteca_storage::config::StorageConfig;
use fonoteca_core::domain::banda::NewBanda;
use fonoteca_core::domain::genero::NewGenero;
use fonoteca_core::ports::CatalogRepository;
use fonoteca_storage::SqliteCatalogRepository;

fn main() {
  tracing_subscriber::fmt().init();

  let cfg = StorageConfig::load().expect("failed to load storage config");
  let db_path = PATHS.data_dir.join(&cfg.db_filename);

  println!("Opening catalog at {}", db_path.display());
  let repo =
    SqliteCatalogRepository::new(&db_path.to_string_lossy()).expect("failed to connect");

  if let Some(mode) = &cfg.journal_mode {
    repo.set_journal_mode(mode).expect("failed to set journal mode");
  }

  let genero = repo
    .insert_genero(&NewGenero { descricao: "Smoke Rock".to_string(), imagem: None })
    .expect("failed to insert genero");
  println!("Inserted genero with id = {}", genero.id);

  let banda = repo
    .insert_banda(&NewBanda {
      nome: "Smoke Band".to_string(),
      genero_id: genero.id,
      imagem: None,
    })
    .expect("failed to insert banda");
  println!("Inserted banda with id = {}", banda.id);

  let bandas = repo.bandas_de_genero(genero.id).expect("failed to list bandas");
  println!("Bandas of {}: {bandas:?}", genero.descricao);

  repo.delete_genero(genero.id).expect("failed to delete genero");
  println!("Cascade delete OK");
}
