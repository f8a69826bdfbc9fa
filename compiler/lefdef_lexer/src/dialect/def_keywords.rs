//! DEF keyword table, sorted by byte value for binary search.

/// Upper-case DEF keywords.
pub(crate) const DEF_KEYWORDS: &[&str] = &[
    "ALIGN", "ANALOG", "AND", "ANTENNAMODEL", "ANTENNAPINDIFFAREA", "ANTENNAPINGATEAREA",
    "ANTENNAPINMAXAREACAR", "ANTENNAPINMAXCUTCAR", "ANTENNAPINMAXSIDEAREACAR",
    "ANTENNAPINPARTIALCUTAREA", "ANTENNAPINPARTIALMETALAREA", "ANTENNAPINPARTIALMETALSIDEAREA",
    "ARRAY", "ASSERTIONS", "BALANCED", "BEGINEXT", "BITS", "BLOCKAGES", "BLOCKAGEWIRE",
    "BLOCKRING", "BLOCKWIRE", "BOTTOMLEFT", "BUSBITCHARS", "BY", "CANNOTOCCUPY", "CANPLACE",
    "CAPACITANCE", "CLOCK", "COMMONSCANPINS", "COMPONENT", "COMPONENTMASKSHIFT", "COMPONENTPIN",
    "COMPONENTS", "COMPS", "COMP_GEN", "CONSTRAINTS", "COREWIRE", "COVER", "CUTSIZE", "CUTSPACING",
    "DEFAULTCAP", "DEFINE", "DEFINEB", "DEFINES", "DESIGN", "DESIGNRULEWIDTH", "DIAGWIDTH",
    "DIEAREA", "DIFF", "DIRECTION", "DIST", "DISTANCE", "DIVIDERCHAR", "DO", "DRCFILL",
    "DRIVECELL", "E", "EEQMASTER", "ELSE", "ENCLOSURE", "END", "ENDEXT", "EQ", "EQUAL", "ESTCAP",
    "EXCEPTPGNET", "FALL", "FALLMAX", "FALLMIN", "FALSE", "FE", "FEEDTHRU", "FENCE", "FILLS",
    "FILLWIRE", "FILLWIREOPC", "FIXED", "FIXEDBUMP", "FLOATING", "FLOORPLAN", "FN", "FOLLOWPIN",
    "FOREIGN", "FPC", "FREQUENCY", "FROMCLOCKPIN", "FROMCOMPPIN", "FROMIOPIN", "FROMPIN", "FS",
    "FW", "GCELLGRID", "GE", "GENERATE", "GROUND", "GROUNDSENSITIVITY", "GROUP", "GROUPS", "GT",
    "GUIDE", "HALO", "HARDSPACING", "HISTORY", "HOLDFALL", "HOLDRISE", "HOLE", "HORIZONTAL", "IF",
    "IN", "INOUT", "INPUT", "INTEGER", "IOTIMINGS", "IOWIRE", "LAYER", "LAYERS", "LE", "LT",
    "MACRO", "MASK", "MAX", "MAXBITS", "MAXDIST", "MAXHALFPERIMETER", "MAXX", "MAXY", "MICRONS",
    "MIN", "MINCUTS", "MINPINS", "MUSTJOIN", "N", "NAMEMAPSTRING", "NAMESCASESENSITIVE", "NE",
    "NET", "NETEXPR", "NETLIST", "NETS", "NEW", "NONDEFAULTRULE", "NONDEFAULTRULES", "NOSHIELD",
    "NOT", "NUMBER", "OFF", "OFFSET", "ON", "OPC", "OR", "ORDERED", "ORIGIN", "ORIGINAL", "OUT",
    "OUTPUT", "OXIDE1", "OXIDE2", "OXIDE3", "OXIDE4", "PADRING", "PARALLEL", "PARTIAL",
    "PARTITION", "PARTITIONS", "PATH", "PATTERN", "PATTERNNAME", "PIN", "PINPROPERTIES", "PINS",
    "PLACED", "PLACEMENT", "POLYGON", "PORT", "POWER", "PROPERTY", "PROPERTYDEFINITIONS",
    "PUSHDOWN", "RANGE", "REAL", "RECT", "REGION", "REGIONS", "REREENTRANTPATHS", "RESET", "RING",
    "RISE", "RISEMAX", "RISEMIN", "ROUTED", "ROUTEHALO", "ROW", "ROWCOL", "ROWS", "S", "SCAN",
    "SCANCHAINS", "SETUPFALL", "SETUPRISE", "SHAPE", "SHIELD", "SHIELDNET", "SIGNAL", "SITE",
    "SLEWRATE", "SLOTS", "SNET", "SNETS", "SOFT", "SOURCE", "SPACING", "SPECIAL", "SPECIALNET",
    "SPECIALNETS", "START", "START_NET", "STEINER", "STEP", "STOP", "STRING", "STRIPE", "STYLE",
    "STYLES", "SUBNET", "SUM", "SUPPLYSENSITIVITY", "SYNTHESIZED", "TAPER", "TAPERRULE", "TECH",
    "TECHNOLOGY", "THEN", "THRUPIN", "TIEOFF", "TIMING", "TIMINGDISABLES", "TOCLOCKPIN",
    "TOCOMPPIN", "TOIOPIN", "TOPIN", "TOPRIGHT", "TRACKS", "TRUE", "TRUNK", "TURNOFF", "TYPE",
    "UNITS", "UNPLACED", "USE", "USER", "VARIABLE", "VERSION", "VERTICAL", "VIA", "VIARULE",
    "VIAS", "VIRTUAL", "VOLTAGE", "VPIN", "W", "WEIGHT", "WIDTH", "WIRECAP", "WIREDLOGIC",
    "WIREEXT", "X", "XTALK", "Y",
];
