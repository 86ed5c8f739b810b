//! Entry point and app wiring templates

use super::module_specifier;
use crate::config::{Database, Variant};

/// `src/index.*`: starts the server from the app module
pub fn entry_point(variant: Variant) -> String {
    format!(
        r#"import app from '{app}';

const port = process.env.PORT || 5000;
app.listen(port, () => {{
  console.log(`🚀 Server running on http://localhost:${{port}}`);
}});
"#,
        app = module_specifier(variant, "./app")
    )
}

/// `src/app.*`: logging, security headers, CORS, body validation, a sample
/// route, then the not-found and error handlers, in that order
pub fn app_wiring(variant: Variant, database: Database) -> String {
    let mut out = String::from(
        "import express from 'express';
import morgan from 'morgan';
import helmet from 'helmet';
import cors from 'cors';
import dotenv from 'dotenv';
dotenv.config();

",
    );

    for name in ["validateBody", "notFound", "errorHandler"] {
        let path = format!("./middlewares/global/{}", name);
        out.push_str(&format!(
            "import {{ {} }} from '{}';\n",
            name,
            module_specifier(variant, &path)
        ));
    }
    if variant.is_typed() {
        out.push_str("import { MessageResponse } from './interfaces/MessageResponse';\n");
    }

    if database.is_enabled() {
        out.push_str(&format!(
            "\n// import {{ connectDB }} from '{}';\n",
            module_specifier(variant, "./config/db")
        ));
        out.push_str("import mongoSanitize from 'express-mongo-sanitize';\n");
        out.push_str("// connectDB(); // Uncomment to enable DB connection\n");
    }

    out.push_str(
        "
const app = express();

app.use(morgan('dev'));
app.use(helmet());
app.use(cors());

// Reject suspicious request data before it reaches any route
app.use(express.json(), validateBody);
",
    );
    if database.is_enabled() {
        out.push_str("// app.use(mongoSanitize()); // Uncomment together with connectDB()\n");
    }

    let route_types = if variant.is_typed() {
        "<{}, MessageResponse>"
    } else {
        ""
    };
    out.push_str(&format!(
        "
app.get{}('/', (req, res) => {{
  res.json({{
    message: 'Hi there!',
  }});
}});

// Global Middlewares
app.use(notFound);
app.use(errorHandler);

export default app;
",
        route_types
    ));

    out
}
