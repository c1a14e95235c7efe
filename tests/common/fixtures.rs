//! Test fixtures - reusable script fragments.

/// Primary script with no errors
pub const MAIN_SCRIPT: &str = "\
using System;

var greeting = Greet(\"world\");
Console.WriteLine(greeting);
";

/// Primary script with an unknown name on line 5
pub const MAIN_WITH_ERROR: &str = "\
using System;

var greeting = Greet(\"world\");
Console.WriteLine(greeting);
Console.WriteLine(undefined_symbol);
";

/// Imported fragment with three header lines
pub const LIB_SCRIPT: &str = "\
using System.IO;
using System.Linq;
using System.Text;
static string Greet(string name)
    => $\"hello {name}\";
";

/// Imported fragment with three header lines and an error on body line 2
pub const LIB_WITH_ERROR: &str = "\
using System.IO;
using System.Linq;
using System.Text;
static string Greet(string name)
    => undefined_symbol + name;
";

/// Imported fragment with a warning on its first body line
pub const LIB_WITH_WARNING: &str = "\
using System.Linq;
static string Greet(string name) { int unused_local; return name; }
";

/// Fragment whose header never ends
pub const UNTERMINATED_HEADER: &str = "using System;\n/* header comment";
