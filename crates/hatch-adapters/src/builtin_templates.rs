//! Service and model templates that ship with hatch.
//!
//! Every service template renders `index.js` from its kind-specific source
//! and copies the shared `hooks/index.js` verbatim. The generated code
//! targets a feathers application whose services directory is
//! `src/services` and whose models live in `src/models`.

use hatch_core::domain::{FileSpec, REGISTRY_MARKER, ServiceTemplate, TemplateKind};

/// Starting content for a fresh services registry (`src/services/index.js`).
///
/// Activation lines are inserted above the marker line.
pub fn registry_skeleton() -> String {
    format!("export default function () {{\n  const app = this;\n  {REGISTRY_MARKER}\n}}\n")
}

/// Shared hooks module, copied without substitution.
const HOOKS: &str = r#"const globalHooks = [];

export default {
  before: {
    all: [...globalHooks],
    find: [],
    get: [],
    create: [],
    update: [],
    patch: [],
    remove: []
  },
  after: {
    all: [],
    find: [],
    get: [],
    create: [],
    update: [],
    patch: [],
    remove: []
  }
};
"#;

const GENERIC: &str = r#"import hooks from './hooks';

class Service {
  constructor(options) {
    this.options = options || {};
  }

  find(params) {
    return Promise.resolve([]);
  }

  get(id, params) {
    return Promise.resolve({ id, text: `A new {{NAME}} with ID: ${id}!` });
  }

  create(data, params) {
    if (Array.isArray(data)) {
      return Promise.all(data.map(current => this.create(current)));
    }

    return Promise.resolve(data);
  }

  update(id, data, params) {
    return Promise.resolve(data);
  }

  patch(id, data, params) {
    return Promise.resolve(data);
  }

  remove(id, params) {
    return Promise.resolve({ id });
  }
}

export default function () {
  const app = this;

  app.use('/{{PLURAL_NAME}}', new Service());

  const service = app.service('/{{PLURAL_NAME}}');
  service.before(hooks.before);
  service.after(hooks.after);
}

export { Service };
"#;

const MEMORY: &str = r#"import memory from 'feathers-memory';
import hooks from './hooks';

export default function () {
  const app = this;

  const options = {
    paginate: {
      default: 5,
      max: 25
    }
  };

  app.use('/{{PLURAL_NAME}}', memory(options));

  const service = app.service('/{{PLURAL_NAME}}');
  service.before(hooks.before);
  service.after(hooks.after);
}
"#;

const NEDB: &str = r#"import path from 'path';
import NeDB from 'nedb';
import service from 'feathers-nedb';
import hooks from './hooks';

export default function () {
  const app = this;

  const db = new NeDB({
    filename: path.join(app.get('nedb'), '{{PLURAL_NAME}}.db'),
    autoload: true
  });

  const options = {
    Model: db,
    paginate: {
      default: 5,
      max: 25
    }
  };

  app.use('/{{PLURAL_NAME}}', service(options));

  const {{NAME}}Service = app.service('/{{PLURAL_NAME}}');
  {{NAME}}Service.before(hooks.before);
  {{NAME}}Service.after(hooks.after);
}
"#;

const MONGOOSE: &str = r#"import service from 'feathers-mongoose';
import {{NAME}} from '../../models/{{NAME}}.model';
import hooks from './hooks';

export default function () {
  const app = this;

  const options = {
    Model: {{NAME}},
    paginate: {
      default: 5,
      max: 25
    }
  };

  app.use('/{{PLURAL_NAME}}', service(options));

  const {{NAME}}Service = app.service('/{{PLURAL_NAME}}');
  {{NAME}}Service.before(hooks.before);
  {{NAME}}Service.after(hooks.after);
}
"#;

const SEQUELIZE: &str = r#"import service from 'feathers-sequelize';
import {{NAME}} from '../../models/{{NAME}}.model';
import hooks from './hooks';

export default function () {
  const app = this;

  const options = {
    Model: {{NAME}}(app.get('sequelize')),
    paginate: {
      default: 5,
      max: 25
    }
  };

  app.use('/{{PLURAL_NAME}}', service(options));

  const {{NAME}}Service = app.service('/{{PLURAL_NAME}}');
  {{NAME}}Service.before(hooks.before);
  {{NAME}}Service.after(hooks.after);
}
"#;

const MONGOOSE_MODEL: &str = r#"// {{NAME_KEBAB}}.model.js - A mongoose model
//
// See http://mongoosejs.com/docs/models.html
// for more of what you can do here.

import mongoose from 'mongoose';

const Schema = mongoose.Schema;

const {{NAME}}Schema = new Schema({
  text: { type: String, required: true },
  createdAt: { type: Date, 'default': Date.now },
  updatedAt: { type: Date, 'default': Date.now }
});

const {{NAME}}Model = mongoose.model('{{NAME}}', {{NAME}}Schema);

export default {{NAME}}Model;
"#;

const SEQUELIZE_MODEL: &str = r#"// {{NAME_KEBAB}}.model.js - A sequelize model
//
// See http://docs.sequelizejs.com/en/latest/docs/models-definition/
// for more of what you can do here.

import Sequelize from 'sequelize';

export default function (sequelize) {
  const {{NAME}} = sequelize.define('{{PLURAL_NAME}}', {
    text: {
      type: Sequelize.STRING,
      allowNull: false
    }
  }, {
    freezeTableName: true
  });

  {{NAME}}.sync();

  return {{NAME}};
}
"#;

/// One template per [`TemplateKind`].
pub fn service_templates() -> Vec<ServiceTemplate> {
    TemplateKind::ALL
        .into_iter()
        .map(|kind| {
            ServiceTemplate::new(kind, kind.description())
                .with_file(FileSpec::parameterized("index.js", service_source(kind)))
                .with_file(FileSpec::literal("hooks/index.js", HOOKS))
        })
        .collect()
}

fn service_source(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Generic => GENERIC,
        TemplateKind::Memory => MEMORY,
        TemplateKind::NeDb => NEDB,
        TemplateKind::Mongoose => MONGOOSE,
        TemplateKind::Sequelize => SEQUELIZE,
    }
}

/// Model definition source for kinds that persist through an ORM.
pub fn model_source(kind: TemplateKind) -> Option<&'static str> {
    match kind {
        TemplateKind::Mongoose => Some(MONGOOSE_MODEL),
        TemplateKind::Sequelize => Some(SEQUELIZE_MODEL),
        TemplateKind::Generic | TemplateKind::Memory | TemplateKind::NeDb => None,
    }
}
