//! LEF keyword table, sorted by byte value for binary search.

/// Upper-case LEF keywords, including the `&`-prefixed statement keywords.
pub(crate) const LEF_KEYWORDS: &[&str] = &[
    "&CLOSEFILE", "&CREATEFILE", "&DEFINE", "&DEFINEB", "&DEFINES", "&ERROR", "&FATALERROR",
    "&MESSAGE", "&OPENFILE", "&WARNING", "ABOVE", "ABUT", "ABUTMENT", "ACCURRENTDENSITY", "ACTIVE",
    "ADJACENTCUTS", "ANALOG", "AND", "ANTENNAAREADIFFREDUCEPWL", "ANTENNAAREAFACTOR",
    "ANTENNAAREAMINUSDIFF", "ANTENNAAREARATIO", "ANTENNACELL", "ANTENNACUMAREARATIO",
    "ANTENNACUMDIFFAREARATIO", "ANTENNACUMDIFFSIDEAREARATIO", "ANTENNACUMROUTINGPLUSCUT",
    "ANTENNACUMSIDEAREARATIO", "ANTENNADIFFAREA", "ANTENNADIFFAREARATIO",
    "ANTENNADIFFSIDEAREARATIO", "ANTENNAGATEAREA", "ANTENNAGATEPLUSDIFF", "ANTENNAINOUTDIFFAREA",
    "ANTENNAINPUTGATEAREA", "ANTENNALENGTHFACTOR", "ANTENNAMAXAREACAR", "ANTENNAMAXCUTCAR",
    "ANTENNAMAXSIDEAREACAR", "ANTENNAMETALAREA", "ANTENNAMETALLENGTH", "ANTENNAMODEL",
    "ANTENNAOUTPUTDIFFAREA", "ANTENNAPARTIALCUTAREA", "ANTENNAPARTIALMETALAREA",
    "ANTENNAPARTIALMETALSIDEAREA", "ANTENNASIDEAREAFACTOR", "ANTENNASIDEAREARATIO", "ANTENNASIZE",
    "ANYEDGE", "AREA", "AREAIO", "ARRAY", "ARRAYCUTS", "ARRAYSPACING", "AVERAGE", "BEGINEXT",
    "BELOW", "BLACKBOX", "BLOCK", "BOTTOMLEFT", "BOTTOMRIGHT", "BUFFER", "BUMP", "BUSBITCHARS",
    "BY", "CANNOTOCCUPY", "CANPLACE", "CAPACITANCE", "CAPMULTIPLIER", "CENTERTOCENTER", "CLASS",
    "CLEARANCEMEASURE", "CLOCK", "CLOCKTYPE", "COLUMNMAJOR", "COMPONENTPIN", "CORE", "CORNER",
    "CORRECTIONFACTOR", "CORRECTIONTABLE", "COVER", "CPERSQDIST", "CURRENT", "CURRENTDEN",
    "CURRENTSOURCE", "CUT", "CUTAREA", "CUTSIZE", "CUTSPACING", "DATA", "DATABASE",
    "DCCURRENTDENSITY", "DEFAULT", "DEFAULTCAP", "DELAY", "DENSITY", "DENSITYCHECKSTEP",
    "DENSITYCHECKWINDOW", "DESIGNRULEWIDTH", "DIAG135", "DIAG45", "DIAGMINEDGELENGTH", "DIAGPITCH",
    "DIAGSPACING", "DIAGWIDTH", "DIELECTRIC", "DIFFUSEONLY", "DIRECTION", "DIVIDERCHAR", "DO", "E",
    "EDGECAPACITANCE", "EDGERATE", "EDGERATESCALEFACTOR", "EDGERATETHRESHOLD1",
    "EDGERATETHRESHOLD2", "EEQ", "ELSE", "ENCLOSURE", "END", "ENDCAP", "ENDEXT", "ENDOFLINE",
    "ENDOFNOTCHWIDTH", "EUCLIDEAN", "EXCEPTEXTRACUT", "EXCEPTPGNET", "EXCEPTSAMEPGNET",
    "EXTENSION", "FALL", "FALLCS", "FALLRS", "FALLSATCUR", "FALLSATT1", "FALLSLEWLIMIT", "FALLT0",
    "FALLTHRESH", "FALLVOLTAGETHRESHOLD", "FALSE", "FE", "FEEDTHRU", "FILLACTIVESPACING", "FIXED",
    "FIXEDMASK", "FLIP", "FLOORPLAN", "FN", "FOREIGN", "FREQUENCY", "FROMABOVE", "FROMBELOW",
    "FROMPIN", "FS", "FUNCTION", "FW", "GCELLGRID", "GENERATE", "GENERATED", "GENERATOR", "GROUND",
    "GROUNDSENSITIVITY", "HARDSPACING", "HEIGHT", "HISTORY", "HOLD", "HORIZONTAL", "IF", "IMPLANT",
    "INFLUENCE", "INOUT", "INOUTPINANTENNASIZE", "INPUT", "INPUTNOISEMARGIN",
    "INPUTPINANTENNASIZE", "INSIDECORNER", "INTEGER", "INTRINSIC", "INVERT", "INVERTER", "IRDROP",
    "ITERATE", "IV_TABLES", "LAYER", "LAYERS", "LEAKAGE", "LENGTH", "LENGTHSUM", "LENGTHTHRESHOLD",
    "LEQ", "LIBRARY", "LONGARRAY", "MACRO", "MANUFACTURINGGRID", "MASK", "MASTERSLICE", "MATCH",
    "MAXADJACENTSLOTSPACING", "MAXCOAXIALSLOTSPACING", "MAXDELAY", "MAXEDGES",
    "MAXEDGESLOTSPACING", "MAXIMUMDENSITY", "MAXLOAD", "MAXVIASTACK", "MAXWIDTH", "MAXXY",
    "MEGAHERTZ", "METALOVERHANG", "MICRONS", "MILLIAMPS", "MILLIWATTS", "MINCUTS",
    "MINENCLOSEDAREA", "MINFEATURE", "MINIMUMCUT", "MINIMUMDENSITY", "MINPINS", "MINSIZE",
    "MINSTEP", "MINWIDTH", "MPWH", "MPWL", "MUSTJOIN", "MX", "MXR90", "MY", "MYR90", "N",
    "NAMEMAPSTRING", "NAMESCASESENSITIVE", "NANOSECONDS", "NEGEDGE", "NETEXPR", "NETS", "NEW",
    "NOISETABLE", "NONDEFAULTRULE", "NONE", "NONINVERT", "NONUNATE", "NOTCHLENGTH", "NOTCHSPACING",
    "NOWIREEXTENSIONATPIN", "OBS", "OFF", "OFFSET", "OHMS", "ON", "OR", "ORIENT", "ORIENTATION",
    "ORIGIN", "ORTHOGONAL", "OUTPUT", "OUTPUTNOISEMARGIN", "OUTPUTPINANTENNASIZE",
    "OUTPUTRESISTANCE", "OUTSIDECORNER", "OVERHANG", "OVERLAP", "OVERLAPS", "OXIDE1", "OXIDE2",
    "OXIDE3", "OXIDE4", "PAD", "PARALLELEDGE", "PARALLELOVERLAP", "PARALLELRUNLENGTH", "PATH",
    "PATTERN", "PEAK", "PERIOD", "PGONLY", "PICOFARADS", "PIN", "PITCH", "PLACED", "POLYGON",
    "PORT", "POSEDGE", "POST", "POWER", "PRE", "PREFERENCLOSURE", "PRL", "PROPERTY",
    "PROPERTYDEFINITIONS", "PROTRUSIONWIDTH", "PULLDOWNRES", "PWL", "R0", "R180", "R270", "R90",
    "RANGE", "REAL", "RECOVERY", "RECT", "RESISTANCE", "RESISTIVE", "RING", "RISE", "RISECS",
    "RISERS", "RISESATCUR", "RISESATT1", "RISESLEWLIMIT", "RISET0", "RISETHRESH",
    "RISEVOLTAGETHRESHOLD", "RMS", "ROUTING", "ROWABUTSPACING", "ROWCOL", "ROWMAJOR",
    "ROWMINSPACING", "ROWPATTERN", "RPERSQ", "S", "SAMENET", "SCANUSE", "SDFCOND", "SDFCONDEND",
    "SDFCONDSTART", "SETUP", "SHAPE", "SHRINKAGE", "SIGNAL", "SITE", "SIZE", "SKEW", "SLOTLENGTH",
    "SLOTWIDTH", "SLOTWIRELENGTH", "SLOTWIREWIDTH", "SOFT", "SOURCE", "SPACER", "SPACING",
    "SPACINGTABLE", "SPECIALNETS", "SPLITWIREWIDTH", "STABLE", "STACK", "START", "STEP", "STOP",
    "STRING", "STRUCTURE", "SUPPLYSENSITIVITY", "SYMMETRY", "TABLE", "TABLEAXIS", "TABLEDIMENSION",
    "TABLEENTRIES", "TAPERRULE", "THEN", "THICKNESS", "TIEHIGH", "TIELOW", "TIEOFFR", "TIME",
    "TIMING", "TO", "TOPIN", "TOPLEFT", "TOPOFSTACKONLY", "TOPRIGHT", "TRACKS", "TRANSITIONTIME",
    "TRISTATE", "TRUE", "TWOEDGES", "TWOWIDTHS", "TYPE", "UNATENESS", "UNITS",
    "UNIVERSALNOISEMARGIN", "USE", "USELENGTHTHRESHOLD", "USEMINSPACING", "USER", "USEVIA",
    "USEVIARULE", "VARIABLE", "VERSION", "VERTICAL", "VHI", "VIA", "VIARULE", "VICTIMLENGTH",
    "VICTIMNOISE", "VIRTUAL", "VLO", "VOLTAGE", "VOLTS", "W", "WELLTAP", "WIDTH", "WIRECAP",
    "WIREEXTENSION", "WITHIN", "X", "Y",
];
