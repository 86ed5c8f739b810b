//! Optional integration connectors under `src/config/`

use crate::config::Variant;

/// `src/config/db.*`: connects to MongoDB, exiting the process on failure
pub fn database(variant: Variant) -> String {
    let (signature, uri) = match variant {
        Variant::Typed => (
            "export async function connectDB(): Promise<void> {",
            "process.env.MONGODB_URI as string",
        ),
        Variant::Untyped => ("export async function connectDB() {", "process.env.MONGODB_URI"),
    };

    format!(
        r#"import mongoose from 'mongoose';

{signature}
  try {{
    await mongoose.connect({uri});
    console.log('✅ Connected to MongoDB!');
  }} catch (err) {{
    console.error('❌ Could not connect to MongoDB:', err);
    process.exit(1);
  }}
}}
"#
    )
}

/// `src/config/cloudinary.*`: identical for both variants
pub fn media_cloud() -> String {
    r#"import { v2 as cloudinary } from 'cloudinary';

cloudinary.config({
  cloud_name: process.env.CLOUD_NAME,
  api_key: process.env.CLOUD_API_KEY,
  api_secret: process.env.CLOUD_API_SECRET,
});

export default cloudinary;
"#
    .to_string()
}
