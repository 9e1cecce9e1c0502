pub use {
    anyhow,
    arcstr,
    bio,
    itertools,
    log,
    polars,
    pretty_env_logger,
    rand,
};
