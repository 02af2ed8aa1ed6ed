//! Source templates for the Express-style project generator.
//!
//! These use the same `{{placeholder}}` micro language as the design
//! renderer (see `domain::interpolate`). Substituted values are inserted
//! verbatim and never re-scanned, so generated code containing braces is
//! safe to inject through a placeholder.

/// CRUD routes for one model. Placeholders: `model`, `lower`, `plural`.
pub const ROUTES: &str = r#"const express = require('express');
const router = express.Router();
const {{model}} = require('../models/{{model}}');

// GET /api/{{plural}} - list all {{plural}}
router.get('/', async (req, res) => {
  try {
    const items = await {{model}}.findAll();
    res.json(items);
  } catch (err) {
    res.status(500).json({ error: err.message });
  }
});

// GET /api/{{plural}}/:id - get one {{lower}} by id
router.get('/:id', async (req, res) => {
  try {
    const item = await {{model}}.findById(req.params.id);
    if (!item) {
      return res.status(404).json({ error: '{{model}} not found' });
    }
    res.json(item);
  } catch (err) {
    res.status(500).json({ error: err.message });
  }
});

// POST /api/{{plural}} - create a {{lower}}
router.post('/', async (req, res) => {
  try {
    const created = await {{model}}.create(req.body);
    res.status(201).json(created);
  } catch (err) {
    res.status(500).json({ error: err.message });
  }
});

// PUT /api/{{plural}}/:id - update a {{lower}}
router.put('/:id', async (req, res) => {
  try {
    const updated = await {{model}}.update(req.params.id, req.body);
    if (!updated) {
      return res.status(404).json({ error: '{{model}} not found' });
    }
    res.json(updated);
  } catch (err) {
    res.status(500).json({ error: err.message });
  }
});

// DELETE /api/{{plural}}/:id - delete a {{lower}}
router.delete('/:id', async (req, res) => {
  try {
    const removed = await {{model}}.remove(req.params.id);
    if (!removed) {
      return res.status(404).json({ error: '{{model}} not found' });
    }
    res.status(204).send();
  } catch (err) {
    res.status(500).json({ error: err.message });
  }
});

module.exports = router;
"#;

/// Data-access model for one model. Placeholders: `model`, `lower`,
/// `validation_rules`.
pub const MODEL: &str = r#"const Joi = require('joi');
const db = require('../db');

const COLLECTION = '{{lower}}';

const schema = Joi.object({
{{validation_rules}}});

const {{model}} = {
  validate(data) {
    return schema.validate(data, { allowUnknown: true });
  },

  async findAll() {
    return db.collection(COLLECTION).find();
  },

  async findById(id) {
    return db.collection(COLLECTION).findById(id);
  },

  async create(data) {
    const { error, value } = this.validate(data);
    if (error) {
      throw new Error(error.message);
    }
    return db.collection(COLLECTION).insert(value);
  },

  async update(id, data) {
    return db.collection(COLLECTION).update(id, data);
  },

  async remove(id) {
    return db.collection(COLLECTION).remove(id);
  },
};

module.exports = {{model}};
"#;

/// Shared token-based auth middleware. No placeholders.
pub const AUTH_MIDDLEWARE: &str = r#"// Token-based request gate. Replace the token check with a real
// verifier before production use.
module.exports = function auth(req, res, next) {
  const header = req.headers.authorization || '';
  const token = header.startsWith('Bearer ') ? header.slice(7) : null;
  if (!token) {
    return res.status(401).json({ error: 'Missing authorization token' });
  }
  req.token = token;
  next();
};
"#;

/// Validation middleware placeholder. No placeholders.
pub const VALIDATION_MIDDLEWARE: &str = r#"// Request validation middleware placeholder. Per-model validation
// lives in the model files; mount schema-aware checks here as needed.
module.exports = function validate(req, res, next) {
  next();
};
"#;

/// Server bootstrap. Placeholders: `project_name`, `requires`, `mounts`.
pub const SERVER: &str = r#"const express = require('express');
const auth = require('./middleware/auth');

{{requires}}
const app = express();
app.use(express.json());

// {{project_name}} API
{{mounts}}
const port = process.env.PORT || 3000;
app.listen(port, () => {
  console.log(`{{project_name}} listening on port ${port}`);
});

module.exports = app;
"#;

/// Package manifest. Placeholders: `project_name`, `version`.
pub const MANIFEST: &str = r#"{
  "name": "{{project_name}}",
  "version": "{{version}}",
  "description": "Generated REST API",
  "main": "server.js",
  "scripts": {
    "start": "node server.js",
    "dev": "nodemon server.js"
  },
  "dependencies": {
    "express": "^4.19.0",
    "joi": "^17.13.0"
  }
}
"#;
