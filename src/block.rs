//! Block identifier constants.
//!
//! A fixed, process-wide mapping from human-readable block names to the
//! integer codes the remote executor understands. The table is read-only;
//! there is no registration mechanism and no mutable global state.
//!
//! `WATER` and `LAVA` are aliases for the flowing variants, matching what
//! world scripts conventionally expect.

pub const AIR: i64 = 0;
pub const STONE: i64 = 1;
pub const GRASS: i64 = 2;
pub const DIRT: i64 = 3;
pub const COBBLESTONE: i64 = 4;
pub const WOOD_PLANKS: i64 = 5;
pub const SAPLING: i64 = 6;
pub const BEDROCK: i64 = 7;
pub const WATER_FLOWING: i64 = 8;
pub const WATER: i64 = WATER_FLOWING;
pub const WATER_STATIONARY: i64 = 9;
pub const LAVA_FLOWING: i64 = 10;
pub const LAVA: i64 = LAVA_FLOWING;
pub const LAVA_STATIONARY: i64 = 11;
pub const SAND: i64 = 12;
pub const GRAVEL: i64 = 13;
pub const GOLD_ORE: i64 = 14;
pub const IRON_ORE: i64 = 15;
pub const COAL_ORE: i64 = 16;
pub const WOOD: i64 = 17;
pub const LEAVES: i64 = 18;
pub const GLASS: i64 = 20;
pub const LAPIS_LAZULI_ORE: i64 = 21;
pub const LAPIS_LAZULI_BLOCK: i64 = 22;
pub const SANDSTONE: i64 = 24;
pub const BED: i64 = 26;
pub const COBWEB: i64 = 30;
pub const GRASS_TALL: i64 = 31;
pub const WOOL: i64 = 35;
pub const FLOWER_YELLOW: i64 = 37;
pub const FLOWER_CYAN: i64 = 38;
pub const MUSHROOM_BROWN: i64 = 39;
pub const MUSHROOM_RED: i64 = 40;
pub const GOLD_BLOCK: i64 = 41;
pub const IRON_BLOCK: i64 = 42;
pub const STONE_SLAB_DOUBLE: i64 = 43;
pub const STONE_SLAB: i64 = 44;
pub const BRICK_BLOCK: i64 = 45;
pub const TNT: i64 = 46;
pub const BOOKSHELF: i64 = 47;
pub const MOSS_STONE: i64 = 48;
pub const OBSIDIAN: i64 = 49;
pub const TORCH: i64 = 50;
pub const FIRE: i64 = 51;
pub const STAIRS_WOOD: i64 = 53;
pub const CHEST: i64 = 54;
pub const DIAMOND_ORE: i64 = 56;
pub const DIAMOND_BLOCK: i64 = 57;
pub const CRAFTING_TABLE: i64 = 58;
pub const FARMLAND: i64 = 60;
pub const FURNACE_INACTIVE: i64 = 61;
pub const FURNACE_ACTIVE: i64 = 62;
pub const DOOR_WOOD: i64 = 64;
pub const LADDER: i64 = 65;
pub const STAIRS_COBBLESTONE: i64 = 67;
pub const DOOR_IRON: i64 = 71;
pub const REDSTONE_ORE: i64 = 73;
pub const SNOW: i64 = 78;
pub const ICE: i64 = 79;
pub const SNOW_BLOCK: i64 = 80;
pub const CACTUS: i64 = 81;
pub const CLAY: i64 = 82;
pub const SUGAR_CANE: i64 = 83;
pub const FENCE: i64 = 85;
pub const GLOWSTONE_BLOCK: i64 = 89;
pub const BEDROCK_INVISIBLE: i64 = 95;
pub const STONE_BRICK: i64 = 98;
pub const GLASS_PANE: i64 = 102;
pub const MELON: i64 = 103;
pub const FENCE_GATE: i64 = 107;
pub const GLOWING_OBSIDIAN: i64 = 246;
pub const NETHER_REACTOR_CORE: i64 = 247;

/// Name to id table, lowercase keys.
pub const NAMES: &[(&str, i64)] = &[
    ("air", AIR),
    ("stone", STONE),
    ("grass", GRASS),
    ("dirt", DIRT),
    ("cobblestone", COBBLESTONE),
    ("wood_planks", WOOD_PLANKS),
    ("sapling", SAPLING),
    ("bedrock", BEDROCK),
    ("water_flowing", WATER_FLOWING),
    ("water", WATER),
    ("water_stationary", WATER_STATIONARY),
    ("lava_flowing", LAVA_FLOWING),
    ("lava", LAVA),
    ("lava_stationary", LAVA_STATIONARY),
    ("sand", SAND),
    ("gravel", GRAVEL),
    ("gold_ore", GOLD_ORE),
    ("iron_ore", IRON_ORE),
    ("coal_ore", COAL_ORE),
    ("wood", WOOD),
    ("leaves", LEAVES),
    ("glass", GLASS),
    ("lapis_lazuli_ore", LAPIS_LAZULI_ORE),
    ("lapis_lazuli_block", LAPIS_LAZULI_BLOCK),
    ("sandstone", SANDSTONE),
    ("bed", BED),
    ("cobweb", COBWEB),
    ("grass_tall", GRASS_TALL),
    ("wool", WOOL),
    ("flower_yellow", FLOWER_YELLOW),
    ("flower_cyan", FLOWER_CYAN),
    ("mushroom_brown", MUSHROOM_BROWN),
    ("mushroom_red", MUSHROOM_RED),
    ("gold_block", GOLD_BLOCK),
    ("iron_block", IRON_BLOCK),
    ("stone_slab_double", STONE_SLAB_DOUBLE),
    ("stone_slab", STONE_SLAB),
    ("brick_block", BRICK_BLOCK),
    ("tnt", TNT),
    ("bookshelf", BOOKSHELF),
    ("moss_stone", MOSS_STONE),
    ("obsidian", OBSIDIAN),
    ("torch", TORCH),
    ("fire", FIRE),
    ("stairs_wood", STAIRS_WOOD),
    ("chest", CHEST),
    ("diamond_ore", DIAMOND_ORE),
    ("diamond_block", DIAMOND_BLOCK),
    ("crafting_table", CRAFTING_TABLE),
    ("farmland", FARMLAND),
    ("furnace_inactive", FURNACE_INACTIVE),
    ("furnace_active", FURNACE_ACTIVE),
    ("door_wood", DOOR_WOOD),
    ("ladder", LADDER),
    ("stairs_cobblestone", STAIRS_COBBLESTONE),
    ("door_iron", DOOR_IRON),
    ("redstone_ore", REDSTONE_ORE),
    ("snow", SNOW),
    ("ice", ICE),
    ("snow_block", SNOW_BLOCK),
    ("cactus", CACTUS),
    ("clay", CLAY),
    ("sugar_cane", SUGAR_CANE),
    ("fence", FENCE),
    ("glowstone_block", GLOWSTONE_BLOCK),
    ("bedrock_invisible", BEDROCK_INVISIBLE),
    ("stone_brick", STONE_BRICK),
    ("glass_pane", GLASS_PANE),
    ("melon", MELON),
    ("fence_gate", FENCE_GATE),
    ("glowing_obsidian", GLOWING_OBSIDIAN),
    ("nether_reactor_core", NETHER_REACTOR_CORE),
];

/// Look up a block id by name, case-insensitively.
pub fn lookup(name: &str) -> Option<i64> {
    let name = name.to_ascii_lowercase();
    NAMES.iter().find(|(n, _)| *n == name).map(|(_, id)| *id)
}
