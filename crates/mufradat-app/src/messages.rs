//! Fixed user-facing reply strings.

pub const GREETING: &str = "سلام! أرسل لي كلمة بالعربية باش نحللها لك.";

pub const REJECTION: &str = "⚠️ يُسمح فقط بالكلمات العربية. حاول مرة أخرى!";

pub const FAILURE: &str = "تعذر تحليل هذه الكلمة، حاول مرة أخرى لاحقًا.";
