//! Chemical process plant equipment.

use super::{CategorySet, EntrySeed, TaxonomyDefinition};

pub const NAME: &str = "chemical";
pub const SECTOR_CODE: &str = "CHEM";
pub const SUB_SECTOR_CODE: &str = "CHEM-ALL";

const ENTRIES: &[EntrySeed] = &[
    // Reaction
    EntrySeed::new(
        "Continuous Stirred Tank Reactor (CSTR)",
        "static",
        &["REACTOR", "VESSEL", "KINETIC"],
        "Continuous flow vessel with agitation for liquid-phase reactions.",
    ),
    EntrySeed::new(
        "Plug Flow Reactor (PFR)",
        "static",
        &["REACTOR", "VESSEL", "KINETIC"],
        "Tubular reactor with no axial mixing, used for gas or liquid phase reactions.",
    ),
    EntrySeed::new(
        "Batch Reactor",
        "static",
        &["REACTOR", "VESSEL", "BATCH"],
        "Closed vessel for batch processing with heating/cooling jacket and agitator.",
    ),
    EntrySeed::new(
        "Fluidized Bed Reactor",
        "static",
        &["REACTOR", "VESSEL", "FLUIDIZED"],
        "Reactor where solid catalyst particles are suspended by upward gas flow.",
    ),
    EntrySeed::new(
        "Fixed Bed Reactor",
        "static",
        &["REACTOR", "VESSEL", "CATALYTIC"],
        "Reactor containing a stationary bed of solid catalyst pellets.",
    ),
    EntrySeed::new(
        "Fermenter",
        "static",
        &["BIOREACTOR", "VESSEL", "BIOTECH"],
        "Sterile vessel for microbial fermentation processes.",
    ),
    EntrySeed::new(
        "Autoclave",
        "static",
        &["VESSEL", "HIGH_PRESSURE", "STERILIZATION"],
        "High-pressure vessel for sterilization or hydrothermal synthesis.",
    ),
    EntrySeed::new(
        "Glass-Lined Reactor",
        "static",
        &["REACTOR", "VESSEL", "CORROSION_RESISTANT"],
        "Steel reactor with glass lining for handling corrosive chemicals.",
    ),

    // Separation
    EntrySeed::new(
        "Distillation Column",
        "static",
        &["COLUMN", "SEPARATION", "THERMAL"],
        "Vertical vessel with trays or packing for separating liquid mixtures by boiling point.",
    ),
    EntrySeed::new(
        "Absorption Column",
        "static",
        &["COLUMN", "SEPARATION", "MASS_TRANSFER"],
        "Column for transferring components from a gas stream into a liquid solvent.",
    ),
    EntrySeed::new(
        "Stripping Column",
        "static",
        &["COLUMN", "SEPARATION", "MASS_TRANSFER"],
        "Column for removing volatile components from a liquid stream using a gas.",
    ),
    EntrySeed::new(
        "Extraction Column",
        "static",
        &["COLUMN", "SEPARATION", "LIQUID_LIQUID"],
        "Column for liquid-liquid extraction based on solubility differences.",
    ),
    EntrySeed::new(
        "Flash Drum",
        "static",
        &["VESSEL", "SEPARATION", "PHASE_CHANGE"],
        "Vessel for separating vapor and liquid phases after a pressure drop.",
    ),
    EntrySeed::new(
        "Decanter",
        "static",
        &["VESSEL", "SEPARATION", "GRAVITY"],
        "Horizontal vessel for separating immiscible liquids by gravity.",
    ),
    EntrySeed::new(
        "Cyclone Separator",
        "static",
        &["SEPARATOR", "SOLID_GAS", "CENTRIFUGAL"],
        "Device using centrifugal force to separate particles from a gas stream.",
    ),
    EntrySeed::new(
        "Centrifuge (Decanter)",
        "rotating",
        &["CENTRIFUGE", "SEPARATION", "SOLID_LIQUID"],
        "Horizontal scroll centrifuge for continuous solid-liquid separation.",
    ),
    EntrySeed::new(
        "Centrifuge (Disc Stack)",
        "rotating",
        &["CENTRIFUGE", "SEPARATION", "LIQUID_LIQUID"],
        "High-speed vertical centrifuge for clarifying liquids or separating emulsions.",
    ),
    EntrySeed::new(
        "Filter Press",
        "static",
        &["FILTER", "SEPARATION", "SOLID_LIQUID"],
        "Pressure filter using plate and frame assembly for dewatering slurries.",
    ),
    EntrySeed::new(
        "Rotary Drum Vacuum Filter",
        "rotating",
        &["FILTER", "SEPARATION", "VACUUM"],
        "Continuous filter using a rotating drum under vacuum to separate solids.",
    ),
    EntrySeed::new(
        "Bag Filter Housing",
        "static",
        &["FILTER", "SEPARATION", "PARTICULATE"],
        "Vessel containing filter bags for removing particles from liquid streams.",
    ),
    EntrySeed::new(
        "Membrane Skid (RO/UF)",
        "static",
        &["MEMBRANE", "SEPARATION", "FILTRATION"],
        "Skid-mounted reverse osmosis or ultrafiltration system.",
    ),
    EntrySeed::new(
        "Scrubber (Wet)",
        "static",
        &["SCRUBBER", "EMISSIONS", "ABSORPTION"],
        "Device using liquid spray to remove pollutants from exhaust gas.",
    ),

    // Heat transfer
    EntrySeed::new(
        "Shell & Tube Heat Exchanger",
        "heat-transfer",
        &["HX", "THERMAL", "TEMA"],
        "Classic heat exchanger with a bundle of tubes inside a cylindrical shell.",
    ),
    EntrySeed::new(
        "Plate & Frame Heat Exchanger",
        "heat-transfer",
        &["HX", "THERMAL", "COMPACT"],
        "High-efficiency exchanger using gasketed metal plates.",
    ),
    EntrySeed::new(
        "Air Cooled Heat Exchanger",
        "heat-transfer",
        &["HX", "THERMAL", "COOLER"],
        "Fin-fan cooler using ambient air to cool process fluids.",
    ),
    EntrySeed::new(
        "Spiral Heat Exchanger",
        "heat-transfer",
        &["HX", "THERMAL", "FOULING"],
        "Compact exchanger with spiral channels, good for slurries and fouling fluids.",
    ),
    EntrySeed::new(
        "Double Pipe Heat Exchanger",
        "heat-transfer",
        &["HX", "THERMAL", "HAIRPIN"],
        "Simple pipe-in-pipe exchanger for small duties or high pressures.",
    ),
    EntrySeed::new(
        "Reboiler (Kettle)",
        "heat-transfer",
        &["HX", "THERMAL", "BOILER"],
        "Shell and tube exchanger used to generate vapor for distillation columns.",
    ),
    EntrySeed::new(
        "Condenser",
        "heat-transfer",
        &["HX", "THERMAL", "PHASE_CHANGE"],
        "Exchanger for condensing vapors into liquid.",
    ),
    EntrySeed::new(
        "Evaporator (Falling Film)",
        "heat-transfer",
        &["EVAPORATOR", "THERMAL", "CONCENTRATION"],
        "Vertical shell and tube exchanger for concentrating solutions.",
    ),
    EntrySeed::new(
        "Cooling Tower",
        "heat-transfer",
        &["COOLING", "WATER", "EVAPORATIVE"],
        "Structure for rejecting heat from cooling water to the atmosphere.",
    ),
    EntrySeed::new(
        "Furnace / Fired Heater",
        "heat-transfer",
        &["HEATER", "COMBUSTION", "THERMAL"],
        "Direct-fired heater for high-temperature process heating.",
    ),

    // Drying and solids
    EntrySeed::new(
        "Spray Dryer",
        "heat-transfer",
        &["DRYER", "SOLIDS", "POWDER"],
        "Dryer that atomizes liquid feed into hot gas to produce powder.",
    ),
    EntrySeed::new(
        "Fluid Bed Dryer",
        "heat-transfer",
        &["DRYER", "SOLIDS", "FLUIDIZED"],
        "Dryer where solids are fluidized by hot air for uniform drying.",
    ),
    EntrySeed::new(
        "Rotary Dryer",
        "rotating",
        &["DRYER", "SOLIDS", "TUMBLING"],
        "Rotating cylinder used to dry bulk solids.",
    ),
    EntrySeed::new(
        "Ribbon Blender",
        "rotating",
        &["MIXER", "SOLIDS", "BATCH"],
        "Horizontal trough mixer with helical ribbon agitator for powders.",
    ),
    EntrySeed::new(
        "Screw Conveyor",
        "rotating",
        &["CONVEYOR", "SOLIDS", "TRANSPORT"],
        "Helical screw for moving bulk materials.",
    ),
    EntrySeed::new(
        "Pneumatic Conveying System",
        "static",
        &["CONVEYOR", "SOLIDS", "AIR"],
        "System for transporting powders using air pressure or vacuum.",
    ),
    EntrySeed::new(
        "Rotary Valve (Airlock)",
        "rotating",
        &["VALVE", "SOLIDS", "METERING"],
        "Device for feeding solids into or out of pressurized systems.",
    ),
    EntrySeed::new(
        "Silo",
        "static",
        &["STORAGE", "SOLIDS", "BULK"],
        "Large vertical container for bulk solid storage.",
    ),

    // Rotating equipment - pumps and compressors
    EntrySeed::new(
        "Centrifugal Pump (OH1)",
        "rotating",
        &["PUMP", "KINETIC", "API610"],
        "Standard overhung end-suction pump.",
    ),
    EntrySeed::new(
        "Centrifugal Pump (BB2)",
        "rotating",
        &["PUMP", "KINETIC", "API610"],
        "Between-bearings radial split pump for higher pressures.",
    ),
    EntrySeed::new(
        "Positive Displacement Pump (Gear)",
        "rotating",
        &["PUMP", "PD", "VISCOUS"],
        "Gear pump for handling viscous fluids.",
    ),
    EntrySeed::new(
        "Positive Displacement Pump (Diaphragm)",
        "rotating",
        &["PUMP", "PD", "METERING"],
        "Reciprocating diaphragm pump, often air-operated (AODD).",
    ),
    EntrySeed::new(
        "Screw Pump",
        "rotating",
        &["PUMP", "PD", "MULTIPHASE"],
        "Pump using intermeshing screws, good for multiphase fluids.",
    ),
    EntrySeed::new(
        "Centrifugal Compressor",
        "rotating",
        &["COMPRESSOR", "KINETIC", "GAS"],
        "Dynamic compressor for high flow gas compression.",
    ),
    EntrySeed::new(
        "Reciprocating Compressor",
        "rotating",
        &["COMPRESSOR", "PD", "HIGH_PRESSURE"],
        "Piston compressor for high pressure gas applications.",
    ),
    EntrySeed::new(
        "Screw Compressor",
        "rotating",
        &["COMPRESSOR", "PD", "ROTARY"],
        "Rotary positive displacement compressor.",
    ),
    EntrySeed::new(
        "Liquid Ring Vacuum Pump",
        "rotating",
        &["PUMP", "VACUUM", "WET"],
        "Pump using a liquid ring to generate vacuum.",
    ),
    EntrySeed::new(
        "Agitator / Mixer",
        "rotating",
        &["MIXER", "AGITATION", "VESSEL"],
        "Top or side entry mixer for tank agitation.",
    ),

    // Piping and valves
    EntrySeed::new(
        "Control Valve (Globe)",
        "piping",
        &["VALVE", "CONTROL", "THROTTLING"],
        "Globe valve with actuator for precise flow control.",
    ),
    EntrySeed::new(
        "Ball Valve",
        "piping",
        &["VALVE", "ISOLATION", "ON_OFF"],
        "Quarter-turn valve for tight shutoff.",
    ),
    EntrySeed::new(
        "Butterfly Valve",
        "piping",
        &["VALVE", "ISOLATION", "LARGE_BORE"],
        "Compact quarter-turn valve for large lines.",
    ),
    EntrySeed::new(
        "Safety Relief Valve (PSV)",
        "piping",
        &["VALVE", "SAFETY", "PRESSURE"],
        "Valve designed to open at a set pressure to protect equipment.",
    ),
    EntrySeed::new(
        "Check Valve",
        "piping",
        &["VALVE", "NON_RETURN", "FLOW"],
        "Valve allowing flow in only one direction.",
    ),
    EntrySeed::new(
        "Rupture Disc",
        "piping",
        &["SAFETY", "PRESSURE", "DISPOSABLE"],
        "Non-reclosing pressure relief device.",
    ),
    EntrySeed::new(
        "Steam Trap",
        "piping",
        &["TRAP", "STEAM", "CONDENSATE"],
        "Device to discharge condensate while holding back steam.",
    ),
    EntrySeed::new(
        "Strainers (Y/Basket)",
        "piping",
        &["FILTER", "PIPING", "PROTECTION"],
        "In-line filter to remove debris from piping.",
    ),

    // Instrumentation
    EntrySeed::new(
        "Coriolis Flow Meter",
        "instrumentation",
        &["METER", "FLOW", "MASS"],
        "Direct mass flow meter measuring fluid density and flow.",
    ),
    EntrySeed::new(
        "Magnetic Flow Meter",
        "instrumentation",
        &["METER", "FLOW", "CONDUCTIVE"],
        "Flow meter for conductive liquids with no moving parts.",
    ),
    EntrySeed::new(
        "Vortex Flow Meter",
        "instrumentation",
        &["METER", "FLOW", "VORTEX"],
        "Flow meter using vortex shedding principle.",
    ),
    EntrySeed::new(
        "Radar Level Transmitter",
        "instrumentation",
        &["LEVEL", "RADAR", "NON_CONTACT"],
        "Non-contact level measurement using radar waves.",
    ),
    EntrySeed::new(
        "Differential Pressure Transmitter",
        "instrumentation",
        &["PRESSURE", "LEVEL", "FLOW"],
        "Versatile instrument measuring pressure difference.",
    ),
    EntrySeed::new(
        "Temperature Transmitter (RTD/TC)",
        "instrumentation",
        &["TEMPERATURE", "SENSOR", "PROCESS"],
        "Device converting temperature sensor signal to 4-20mA.",
    ),
    EntrySeed::new(
        "pH Analyzer",
        "instrumentation",
        &["ANALYZER", "LIQUID", "QUALITY"],
        "Online analyzer for measuring acidity/alkalinity.",
    ),
    EntrySeed::new(
        "Gas Chromatograph",
        "instrumentation",
        &["ANALYZER", "GAS", "COMPOSITION"],
        "Analyzer for separating and measuring chemical components.",
    ),

    // Electrical
    EntrySeed::new(
        "Induction Motor",
        "electrical",
        &["MOTOR", "DRIVE", "AC"],
        "Standard AC electric motor for driving pumps and fans.",
    ),
    EntrySeed::new(
        "Variable Frequency Drive (VFD)",
        "electrical",
        &["DRIVE", "CONTROL", "SPEED"],
        "Device for controlling motor speed and torque.",
    ),
    EntrySeed::new(
        "Switchgear (MV/LV)",
        "electrical",
        &["POWER", "DISTRIBUTION", "SAFETY"],
        "Combination of disconnects, fuses, and breakers.",
    ),
    EntrySeed::new(
        "Transformer",
        "electrical",
        &["POWER", "VOLTAGE", "DISTRIBUTION"],
        "Static electrical device for changing voltage levels.",
    ),
    EntrySeed::new(
        "Uninterruptible Power Supply (UPS)",
        "electrical",
        &["POWER", "BACKUP", "CRITICAL"],
        "Battery backup system for critical controls.",
    ),
];

pub fn definition() -> TaxonomyDefinition {
    TaxonomyDefinition::from_seeds(
        NAME,
        SECTOR_CODE,
        SUB_SECTOR_CODE,
        CategorySet::process(),
        ENTRIES,
    )
}
