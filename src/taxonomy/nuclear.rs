//! Commercial nuclear power plant equipment (PWR and BWR).

use super::{CategorySet, EntrySeed, TaxonomyDefinition};

pub const NAME: &str = "nuclear";
pub const SECTOR_CODE: &str = "NUCL";
pub const SUB_SECTOR_CODE: &str = "NUCL-ALL";

const ENTRIES: &[EntrySeed] = &[
    // Reactor and vessels (PWR)
    EntrySeed::new(
        "Reactor Pressure Vessel (PWR)",
        "static",
        &["REACTOR", "VESSEL", "NUCLEAR"],
        "Thick-walled cylindrical vessel containing the nuclear fuel core and coolant.",
    ),
    EntrySeed::new(
        "Steam Generator (U-Tube)",
        "heat-transfer",
        &["HX", "NUCLEAR", "STEAM"],
        "Heat exchanger transferring heat from primary to secondary loop to generate steam.",
    ),
    EntrySeed::new(
        "Pressurizer",
        "static",
        &["VESSEL", "PRESSURE_CONTROL", "PWR"],
        "Vessel maintaining primary circuit pressure via heaters and spray.",
    ),
    EntrySeed::new(
        "Reactor Coolant Pump (RCP)",
        "rotating",
        &["PUMP", "KINETIC", "PRIMARY"],
        "Large vertical pump circulating primary coolant through the reactor core.",
    ),
    EntrySeed::new(
        "Control Rod Drive Mechanism (CRDM)",
        "static",
        &["CONTROL", "SAFETY", "REACTIVITY"],
        "Electro-mechanical device for inserting/withdrawing control rods.",
    ),
    EntrySeed::new(
        "Fuel Assembly (PWR)",
        "static",
        &["FUEL", "CORE", "ZIRCALOY"],
        "Bundle of fuel rods containing uranium dioxide pellets.",
    ),
    EntrySeed::new(
        "Accumulator Tank (ECCS)",
        "static",
        &["TANK", "SAFETY", "INJECTION"],
        "Pressurized tank for passive injection of borated water during LOCA.",
    ),

    // Reactor and vessels (BWR)
    EntrySeed::new(
        "Reactor Pressure Vessel (BWR)",
        "static",
        &["REACTOR", "VESSEL", "BOILING"],
        "Vessel where coolant boils directly in the core to produce steam.",
    ),
    EntrySeed::new(
        "Jet Pump Assembly",
        "static",
        &["PUMP", "STATIC", "CIRCULATION"],
        "Internal pump using driving flow to circulate coolant in BWRs.",
    ),
    EntrySeed::new(
        "Steam Separator",
        "static",
        &["SEPARATOR", "STEAM", "INTERNAL"],
        "Device removing moisture from steam leaving the core.",
    ),
    EntrySeed::new(
        "Steam Dryer",
        "static",
        &["DRYER", "STEAM", "INTERNAL"],
        "Device removing remaining moisture before steam exits vessel.",
    ),
    EntrySeed::new(
        "Recirculation Pump",
        "rotating",
        &["PUMP", "KINETIC", "BWR"],
        "External pump driving the jet pumps for core flow control.",
    ),

    // Balance of plant (steam cycle)
    EntrySeed::new(
        "Steam Turbine (High Pressure)",
        "rotating",
        &["TURBINE", "STEAM", "GENERATION"],
        "Turbine stage receiving main steam from steam generators/reactor.",
    ),
    EntrySeed::new(
        "Steam Turbine (Low Pressure)",
        "rotating",
        &["TURBINE", "STEAM", "GENERATION"],
        "Large turbine stage exhausting to the condenser.",
    ),
    EntrySeed::new(
        "Moisture Separator Reheater (MSR)",
        "heat-transfer",
        &["HX", "SEPARATOR", "EFFICIENCY"],
        "Vessel drying and reheating steam between HP and LP turbines.",
    ),
    EntrySeed::new(
        "Main Condenser",
        "heat-transfer",
        &["HX", "VACUUM", "CONDENSING"],
        "Large heat exchanger condensing turbine exhaust steam.",
    ),
    EntrySeed::new(
        "Condensate Extraction Pump",
        "rotating",
        &["PUMP", "KINETIC", "CONDENSATE"],
        "Pump moving water from condenser hotwell to purification system.",
    ),
    EntrySeed::new(
        "Feedwater Heater (Low Pressure)",
        "heat-transfer",
        &["HX", "FEEDWATER", "EFFICIENCY"],
        "Shell and tube exchanger preheating condensate.",
    ),
    EntrySeed::new(
        "Deaerator",
        "static",
        &["VESSEL", "DEAERATION", "FEEDWATER"],
        "Vessel removing dissolved oxygen from feedwater.",
    ),
    EntrySeed::new(
        "Feedwater Heater (High Pressure)",
        "heat-transfer",
        &["HX", "FEEDWATER", "EFFICIENCY"],
        "Exchanger heating feedwater before it enters steam generators.",
    ),
    EntrySeed::new(
        "Main Feedwater Pump (Turbine Driven)",
        "rotating",
        &["PUMP", "KINETIC", "FEEDWATER"],
        "High capacity pump driven by steam turbine.",
    ),
    EntrySeed::new(
        "Main Feedwater Pump (Motor Driven)",
        "rotating",
        &["PUMP", "KINETIC", "STARTUP"],
        "Motor driven pump for startup and backup.",
    ),
    EntrySeed::new(
        "Heater Drain Pump",
        "rotating",
        &["PUMP", "KINETIC", "DRAINS"],
        "Pump returning heater condensate to the feedwater stream.",
    ),
    EntrySeed::new(
        "Main Generator",
        "electrical",
        &["GENERATOR", "POWER", "ELECTRICAL"],
        "Synchronous generator converting mechanical energy to electricity.",
    ),

    // Safety systems
    EntrySeed::new(
        "High Pressure Safety Injection Pump",
        "rotating",
        &["PUMP", "SAFETY", "ECCS"],
        "Pump for high pressure coolant injection during small break LOCA.",
    ),
    EntrySeed::new(
        "Low Pressure Safety Injection Pump",
        "rotating",
        &["PUMP", "SAFETY", "RHR"],
        "High flow pump for large break LOCA and shutdown cooling.",
    ),
    EntrySeed::new(
        "Containment Spray Pump",
        "rotating",
        &["PUMP", "SAFETY", "CONTAINMENT"],
        "Pump spraying water to reduce containment pressure and scrub iodine.",
    ),
    EntrySeed::new(
        "Refueling Water Storage Tank (RWST)",
        "static",
        &["TANK", "STORAGE", "BORATED"],
        "Large tank storing borated water for refueling and safety injection.",
    ),
    EntrySeed::new(
        "Boric Acid Tank",
        "static",
        &["TANK", "STORAGE", "CHEMICAL"],
        "Tank storing concentrated boric acid solution.",
    ),
    EntrySeed::new(
        "Emergency Diesel Generator (EDG)",
        "rotating",
        &["GENERATOR", "BACKUP", "SAFETY"],
        "Diesel generator providing power to safety buses during LOOP.",
    ),
    EntrySeed::new(
        "Containment Air Cooler",
        "heat-transfer",
        &["HX", "COOLING", "CONTAINMENT"],
        "Fan cooler unit maintaining containment temperature.",
    ),
    EntrySeed::new(
        "Hydrogen Recombiner",
        "static",
        &["PROCESS", "SAFETY", "HYDROGEN"],
        "Device removing hydrogen gas from containment post-accident.",
    ),

    // Auxiliary systems
    EntrySeed::new(
        "Component Cooling Water Pump",
        "rotating",
        &["PUMP", "COOLING", "AUXILIARY"],
        "Pump circulating closed-loop cooling water to plant components.",
    ),
    EntrySeed::new(
        "Service Water Pump",
        "rotating",
        &["PUMP", "COOLING", "INTAKE"],
        "Pump taking water from the ultimate heat sink (river/ocean).",
    ),
    EntrySeed::new(
        "Spent Fuel Pool Cooling Pump",
        "rotating",
        &["PUMP", "COOLING", "FUEL"],
        "Pump circulating water through the spent fuel pool heat exchanger.",
    ),
    EntrySeed::new(
        "Spent Fuel Pool Heat Exchanger",
        "heat-transfer",
        &["HX", "COOLING", "FUEL"],
        "Exchanger removing decay heat from spent fuel pool water.",
    ),
    EntrySeed::new(
        "Charging Pump (CVCS)",
        "rotating",
        &["PUMP", "CONTROL", "INJECTION"],
        "High head pump for volume control and seal injection.",
    ),
    EntrySeed::new(
        "Letdown Heat Exchanger",
        "heat-transfer",
        &["HX", "COOLING", "CVCS"],
        "Exchanger cooling reactor coolant diverted for purification.",
    ),
    EntrySeed::new(
        "Volume Control Tank",
        "static",
        &["TANK", "CONTROL", "CVCS"],
        "Surge tank for the chemical and volume control system.",
    ),
    EntrySeed::new(
        "Demineralizer (Ion Exchanger)",
        "static",
        &["FILTER", "PURIFICATION", "CHEMISTRY"],
        "Vessel containing resin for water purification.",
    ),
    EntrySeed::new(
        "Boric Acid Transfer Pump",
        "rotating",
        &["PUMP", "TRANSFER", "CHEMICAL"],
        "Pump moving boric acid solution.",
    ),

    // Waste and fuel handling
    EntrySeed::new(
        "Spent Fuel Pool",
        "static",
        &["POOL", "STORAGE", "FUEL"],
        "Water-filled pool for storage and cooling of discharged fuel assemblies.",
    ),
    EntrySeed::new(
        "Dry Cask Storage Container",
        "static",
        &["CASK", "STORAGE", "SHIELDING"],
        "Concrete/steel overpack for long-term dry storage of spent fuel.",
    ),
    EntrySeed::new(
        "Radwaste Evaporator",
        "heat-transfer",
        &["EVAPORATOR", "WASTE", "VOLUME_REDUCTION"],
        "Evaporator for concentrating liquid radioactive waste.",
    ),
    EntrySeed::new(
        "Fuel Transfer Canal",
        "static",
        &["STRUCTURE", "TRANSFER", "FUEL"],
        "Water-filled channel connecting reactor and fuel building.",
    ),
    EntrySeed::new(
        "Polar Crane",
        "rotating",
        &["CRANE", "LIFTING", "CONTAINMENT"],
        "Overhead crane inside containment for lifting heavy components.",
    ),

    // Valves
    EntrySeed::new(
        "Main Steam Isolation Valve (MSIV)",
        "piping",
        &["VALVE", "ISOLATION", "SAFETY"],
        "Fast-closing valve to isolate steam generators.",
    ),
    EntrySeed::new(
        "Pressurizer Relief Valve (PORV)",
        "piping",
        &["VALVE", "RELIEF", "CONTROL"],
        "Power-operated relief valve for pressure control.",
    ),
    EntrySeed::new(
        "Main Steam Safety Valve (MSSV)",
        "piping",
        &["VALVE", "SAFETY", "CODE"],
        "Spring-loaded safety valve on steam lines.",
    ),
    EntrySeed::new(
        "Feedwater Isolation Valve",
        "piping",
        &["VALVE", "ISOLATION", "SAFETY"],
        "Valve to isolate feedwater flow to steam generators.",
    ),
    EntrySeed::new(
        "Containment Isolation Valve",
        "piping",
        &["VALVE", "ISOLATION", "BOUNDARY"],
        "Valve closing penetrations through the containment wall.",
    ),
    EntrySeed::new(
        "Turbine Bypass Valve",
        "piping",
        &["VALVE", "CONTROL", "DUMP"],
        "Valve dumping steam to condenser during load rejection.",
    ),

    // Instrumentation
    EntrySeed::new(
        "Ex-Core Neutron Flux Detector",
        "instrumentation",
        &["SENSOR", "NEUTRON", "POWER"],
        "Detector outside vessel measuring reactor power level.",
    ),
    EntrySeed::new(
        "In-Core Neutron Flux Detector",
        "instrumentation",
        &["SENSOR", "NEUTRON", "MAPPING"],
        "Detector inside core for flux mapping.",
    ),
    EntrySeed::new(
        "Reactor Vessel Level Monitoring System",
        "instrumentation",
        &["SENSOR", "LEVEL", "SAFETY"],
        "System monitoring coolant level in the vessel.",
    ),
    EntrySeed::new(
        "Rod Position Indicator",
        "instrumentation",
        &["SENSOR", "POSITION", "CONTROL"],
        "Sensor indicating the position of control rods.",
    ),
    EntrySeed::new(
        "Core Exit Thermocouple",
        "instrumentation",
        &["SENSOR", "TEMPERATURE", "SAFETY"],
        "Thermocouple measuring coolant temperature at core outlet.",
    ),
    EntrySeed::new(
        "Process Radiation Monitor",
        "instrumentation",
        &["SENSOR", "RADIATION", "PROCESS"],
        "Monitor measuring radioactivity in fluid streams.",
    ),
    EntrySeed::new(
        "Area Radiation Monitor",
        "instrumentation",
        &["SENSOR", "RADIATION", "SAFETY"],
        "Monitor measuring ambient radiation levels.",
    ),
    EntrySeed::new(
        "Loose Parts Monitoring System",
        "instrumentation",
        &["SENSOR", "ACOUSTIC", "DIAGNOSTIC"],
        "Acoustic system detecting loose metal parts in the primary system.",
    ),

    // Electrical
    EntrySeed::new(
        "Main Transformer",
        "electrical",
        &["TRANSFORMER", "HV", "TRANSMISSION"],
        "Step-up transformer connecting generator to the grid.",
    ),
    EntrySeed::new(
        "Unit Auxiliary Transformer",
        "electrical",
        &["TRANSFORMER", "HV", "HOUSE_LOAD"],
        "Transformer supplying plant loads during operation.",
    ),
    EntrySeed::new(
        "Startup Transformer",
        "electrical",
        &["TRANSFORMER", "HV", "STARTUP"],
        "Transformer supplying plant loads from offsite power.",
    ),
    EntrySeed::new(
        "4160V Switchgear",
        "electrical",
        &["SWITCHGEAR", "MV", "DISTRIBUTION"],
        "Medium voltage distribution for large motors.",
    ),
    EntrySeed::new(
        "480V Load Center",
        "electrical",
        &["SWITCHGEAR", "LV", "DISTRIBUTION"],
        "Low voltage distribution center.",
    ),
    EntrySeed::new(
        "Motor Control Center (MCC)",
        "electrical",
        &["MCC", "LV", "CONTROL"],
        "Assembly for controlling multiple low voltage motors.",
    ),
    EntrySeed::new(
        "125V DC Battery Bank",
        "electrical",
        &["BATTERY", "DC", "SAFETY"],
        "Battery system for critical control and safety power.",
    ),
    EntrySeed::new(
        "Inverter",
        "electrical",
        &["INVERTER", "AC", "UPS"],
        "Device converting DC battery power to AC for instruments.",
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
