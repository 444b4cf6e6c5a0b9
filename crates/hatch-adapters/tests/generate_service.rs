//! End-to-end generation through the real adapters.

use std::fs;
use std::path::Path;

use hatch_adapters::{
    InMemoryStore, LocalFilesystem, MemoryFilesystem, SimpleRenderer, TemplateModelGenerator,
};
use hatch_core::{
    application::{ApplicationError, ModelOutcome, PatchOutcome, ServiceGenerator},
    domain::{Anchor, Driver, GenerationConfig, ProjectLayout, ServiceCategory, ServiceName},
    error::HatchError,
};
use tempfile::TempDir;

const REGISTRY: &str = "export default function () {\n  const app = this;\n}\n";

fn generator_on<F>(fs: F, layout: &ProjectLayout) -> ServiceGenerator
where
    F: hatch_core::application::Filesystem + Clone + 'static,
{
    ServiceGenerator::new(
        Box::new(InMemoryStore::with_builtin().unwrap()),
        Box::new(SimpleRenderer::new()),
        Box::new(fs.clone()),
        Box::new(TemplateModelGenerator::new(fs, layout.models_root())),
    )
}

fn config(name: &str, category: ServiceCategory, driver: Option<Driver>) -> GenerationConfig {
    GenerationConfig::new(ServiceName::parse(name).unwrap(), category, driver)
}

#[test]
fn generic_service_is_written_and_registered() {
    let layout = ProjectLayout::new("/app");
    let fs = MemoryFilesystem::new().with_file("/app/src/services/index.js", REGISTRY);

    let report = generator_on(fs.clone(), &layout)
        .generate(&config("box", ServiceCategory::Generic, None), &layout, false)
        .unwrap();

    assert_eq!(report.registry, PatchOutcome::Patched(Anchor::ClosingBrace));
    assert_eq!(report.model, None);

    let index = fs.read_file(Path::new("/app/src/services/box/index.js")).unwrap();
    assert!(index.contains("app.use('/boxes', new Service());"));

    let hooks = fs
        .read_file(Path::new("/app/src/services/box/hooks/index.js"))
        .unwrap();
    assert!(hooks.contains("before"));

    let registry = fs.read_file(Path::new("/app/src/services/index.js")).unwrap();
    assert_eq!(
        registry,
        "import box from './box';\nexport default function () {\n  const app = this;\n  app.configure(box);\n}\n"
    );
}

#[test]
fn sequelize_service_gets_a_model() {
    let layout = ProjectLayout::new("/app");
    let fs = MemoryFilesystem::new().with_file("/app/src/services/index.js", REGISTRY);

    let report = generator_on(fs.clone(), &layout)
        .generate(
            &config("person", ServiceCategory::Database, Some(Driver::Postgres)),
            &layout,
            false,
        )
        .unwrap();

    assert!(matches!(report.model, Some(ModelOutcome::Created(_))));

    let index = fs.read_file(Path::new("/app/src/services/person/index.js")).unwrap();
    assert!(index.contains("import service from 'feathers-sequelize';"));
    assert!(index.contains("app.use('/people', service(options));"));

    let model = fs
        .read_file(Path::new("/app/src/models/person.model.js"))
        .unwrap();
    assert!(model.contains("sequelize.define('people'"));
}

#[test]
fn second_run_needs_force_and_keeps_registry_stable() {
    let layout = ProjectLayout::new("/app");
    let fs = MemoryFilesystem::new().with_file("/app/src/services/index.js", REGISTRY);
    let generator = generator_on(fs.clone(), &layout);
    let messages = config("messages", ServiceCategory::Database, Some(Driver::Memory));

    generator.generate(&messages, &layout, false).unwrap();
    let after_first = fs.read_file(Path::new("/app/src/services/index.js")).unwrap();

    let err = generator.generate(&messages, &layout, false).unwrap_err();
    assert!(matches!(
        err,
        HatchError::Application(ApplicationError::ServiceExists { .. })
    ));

    let report = generator.generate(&messages, &layout, true).unwrap();
    assert_eq!(report.registry, PatchOutcome::AlreadyRegistered);
    assert_eq!(
        fs.read_file(Path::new("/app/src/services/index.js")).unwrap(),
        after_first
    );
}

#[test]
fn local_filesystem_run_without_registry() {
    let temp = TempDir::new().unwrap();
    let layout = ProjectLayout::new(temp.path());

    let report = generator_on(LocalFilesystem::new(), &layout)
        .generate(
            &config("audit", ServiceCategory::Database, Some(Driver::MongoDb)),
            &layout,
            false,
        )
        .unwrap();

    assert_eq!(report.registry, PatchOutcome::RegistryMissing);
    assert!(!temp.path().join("src/services/index.js").exists());

    let index = fs::read_to_string(temp.path().join("src/services/audit/index.js")).unwrap();
    assert!(index.contains("import audit from '../../models/audit.model';"));
    assert!(temp.path().join("src/models/audit.model.js").is_file());
}

#[test]
fn registry_without_anchor_leaves_service_files_in_place() {
    let layout = ProjectLayout::new("/app");
    let fs = MemoryFilesystem::new().with_file("/app/src/services/index.js", "module.exports = [];\n");

    let err = generator_on(fs.clone(), &layout)
        .generate(&config("jobs", ServiceCategory::Generic, None), &layout, false)
        .unwrap_err();

    assert_eq!(err.category(), hatch_core::error::ErrorCategory::Registry);
    assert!(fs
        .read_file(Path::new("/app/src/services/jobs/index.js"))
        .is_some());
    assert_eq!(
        fs.read_file(Path::new("/app/src/services/index.js")).unwrap(),
        "module.exports = [];\n"
    );
}
