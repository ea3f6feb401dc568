//! Preview document composer.
//!
//! Assembles one self-contained HTML document from the markup, style, and
//! script buffers. Composition is pure string concatenation: identical inputs
//! always produce byte-identical output, and it cannot fail — errors only
//! manifest later, when the document executes inside the isolated surface.

/// Global error trap injected ahead of the user's script.
///
/// Intercepts uncaught errors and unhandled promise rejections inside the
/// preview context, logs them to the preview's own console, and returns a
/// handled signal so they never propagate to the hosting application.
pub const ERROR_TRAP: &str = "window.onerror = function (message, source, line, column) {\n  console.error('[preview] ' + message + ' (line ' + line + ':' + column + ')');\n  return true;\n};\nwindow.addEventListener('unhandledrejection', function (event) {\n  console.error('[preview] unhandled rejection: ' + event.reason);\n  event.preventDefault();\n});";

/// Compose the preview document from the three role buffers.
///
/// Missing buffers are passed as empty strings by the caller; an empty buffer
/// still yields a complete document wrapper. The error trap script block is
/// always emitted before the user script block.
pub fn compose_document(markup: &str, style: &str, script: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <style>\n\
         {style}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         {markup}\n\
         <script>\n\
         {trap}\n\
         </script>\n\
         <script>\n\
         {script}\n\
         </script>\n\
         </body>\n\
         </html>\n",
        trap = ERROR_TRAP,
    )
}
