use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Arc,
    time::Instant,
};

use ahash::AHashMap;
use log::{info, warn};

use crate::{
    collision_mesh_file::{COLLISION_MESH_BASE_PATH, COLLISION_MESH_FILE_EXTENSION, CollisionMeshFile},
    error::{Error, Result},
    sim::{Field, GameMode},
};

/// Overrides [`COLLISION_MESH_BASE_PATH`] in [`Context::init_from_default`]
pub const ASSET_DIR_ENV_VAR: &str = "RLPREDICT_ASSET_DIR";

/// Modes that ship their own collision meshes
const GAMEMODES_WITH_UNIQUE_MESHES: [GameMode; 2] = [GameMode::Soccar, GameMode::Hoops];

/// Loaded arena assets plus the one field mode selected for this process.
///
/// Build one at startup and hand the [`Field`] from [`set_mode`](Self::set_mode)
/// to everything that simulates.
#[derive(Debug, Default)]
pub struct Context {
    meshes: AHashMap<GameMode, Vec<CollisionMeshFile>>,
    field: Option<Arc<Field>>,
}

impl Context {
    /// A context with no dumped meshes; every mode uses its built-in hull.
    #[must_use]
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Loads from `$RLPREDICT_ASSET_DIR`, falling back to `./collision_meshes/`.
    pub fn init_from_default() -> Result<Self> {
        let folder = env::var_os(ASSET_DIR_ENV_VAR)
            .map_or_else(|| PathBuf::from(COLLISION_MESH_BASE_PATH), PathBuf::from);

        Self::init(folder)
    }

    /// Loads every `<folder>/<mode>/*.cmf` collision mesh.
    ///
    /// Fails if the folder is missing or holds no mesh files at all.
    pub fn init<P: AsRef<Path>>(collision_meshes_folder: P) -> Result<Self> {
        Self::init_from_path(collision_meshes_folder.as_ref())
    }

    fn init_from_path(collision_meshes_folder: &Path) -> Result<Self> {
        if !collision_meshes_folder.exists() {
            return Err(Error::AssetDir {
                path: collision_meshes_folder.to_path_buf(),
                reason: "does not exist",
            });
        }

        if !collision_meshes_folder.is_dir() {
            return Err(Error::AssetDir {
                path: collision_meshes_folder.to_path_buf(),
                reason: "is not a directory",
            });
        }

        let mut mesh_file_map = AHashMap::new();

        for game_mode in GAMEMODES_WITH_UNIQUE_MESHES {
            let folder = collision_meshes_folder.join(game_mode.name());
            if !folder.is_dir() {
                continue;
            }

            let mut files = Vec::new();

            for entry in fs::read_dir(folder)?.flatten() {
                let p = entry.path();

                if !p.is_file()
                    || p.extension()
                        .is_none_or(|ext| ext != COLLISION_MESH_FILE_EXTENSION)
                {
                    continue;
                }

                files.push(fs::read(p)?);
            }

            // directory order is not stable across platforms
            files.sort_unstable();
            mesh_file_map.insert(game_mode, files);
        }

        if mesh_file_map.values().all(Vec::is_empty) {
            return Err(Error::AssetDir {
                path: collision_meshes_folder.to_path_buf(),
                reason: "contains no collision mesh files",
            });
        }

        Self::init_from_mem(mesh_file_map)
    }

    /// Parses raw `.cmf` file contents, keyed by the mode they belong to.
    pub fn init_from_mem(mesh_file_map: AHashMap<GameMode, Vec<Vec<u8>>>) -> Result<Self> {
        info!(
            "Initializing rlpredict v{}...",
            env!("CARGO_PKG_VERSION")
        );

        let start_time = Instant::now();
        let mut meshes = AHashMap::new();

        for (game_mode, mesh_files) in mesh_file_map {
            if mesh_files.is_empty() {
                continue;
            }

            info!("Loading arena meshes for {}...", game_mode.name());

            let mut target_hashes = game_mode.get_hashes();
            let mut mode_meshes = Vec::with_capacity(mesh_files.len());

            for (i, entry) in mesh_files.iter().enumerate() {
                let mesh_file = CollisionMeshFile::read_from_bytes(entry)?;
                let hash = mesh_file.get_hash();

                match target_hashes.get_mut(&hash) {
                    Some(hash_count) => {
                        if *hash_count > 0 {
                            warn!(
                                "Collision mesh [{i}] is a duplicate ({hash:#x}), already loaded a mesh with the same hash."
                            );
                        }
                        *hash_count += 1;
                    }
                    None => warn!(
                        "Collision mesh [{i}] does not match any known {} collision mesh ({hash:#x}), make sure they were dumped from a normal {} arena.",
                        game_mode.name(),
                        game_mode.name()
                    ),
                }

                mode_meshes.push(mesh_file);
            }

            info!(
                "Loaded {} {} collision meshes",
                mode_meshes.len(),
                game_mode.name()
            );
            meshes.insert(game_mode, mode_meshes);
        }

        info!(
            "Finished loading arena collision meshes in {:.3}s",
            start_time.elapsed().as_secs_f32()
        );

        Ok(Self {
            meshes,
            field: None,
        })
    }

    #[must_use]
    pub fn num_meshes(&self, game_mode: GameMode) -> usize {
        self.meshes
            .get(&game_mode.mesh_mode())
            .map_or(0, Vec::len)
    }

    /// Selects the arena layout, building its field on first call.
    ///
    /// The selection is fixed afterwards: asking for the same mode again
    /// returns the same field, asking for another one is logged and ignored.
    pub fn set_mode(&mut self, name: &str) -> Result<Arc<Field>> {
        let game_mode: GameMode = name.parse()?;

        if game_mode == GameMode::Dropshot {
            return Err(Error::UnsupportedMode(game_mode));
        }

        if let Some(field) = &self.field {
            if field.mode() != game_mode {
                warn!(
                    "set_mode(\"{name}\") called after \"{}\" was already selected, ignoring...",
                    field.mode().name()
                );
            }

            return Ok(Arc::clone(field));
        }

        let meshes = self
            .meshes
            .get(&game_mode.mesh_mode())
            .cloned()
            .unwrap_or_default();
        let field = Arc::new(Field::new(game_mode, meshes));

        info!(
            "Selected game mode {} ({} triangles)",
            game_mode.name(),
            field.num_triangles()
        );

        self.field = Some(Arc::clone(&field));
        Ok(field)
    }

    /// The field chosen by [`set_mode`](Self::set_mode).
    pub fn field(&self) -> Result<Arc<Field>> {
        self.field.clone().ok_or(Error::NoMode)
    }

    #[must_use]
    pub fn mode(&self) -> Option<GameMode> {
        self.field.as_ref().map(|field| field.mode())
    }
}
