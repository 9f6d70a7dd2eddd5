//! The built-in schema table: which CDDA record kinds the editor understands
//! and which fields it surfaces as typed editors. Anything a record carries
//! beyond these declarations is still loaded, shown, and written back — the
//! table only controls which editor each known field gets.

use crate::schema::{Schema, SchemaField, ValueKind};

fn mutation_fields() -> Vec<SchemaField> {
    vec![
        SchemaField::new("id", ValueKind::Text).required().help(
            "Unique id of the mutation/trait. Referenced from prereqs, cancels, leads_to \
             and other JSON. Must not repeat among all type: \"mutation\" records.",
        ),
        SchemaField::new("name", ValueKind::LocalizedText)
            .required()
            .help("Display name. Either a plain string or a translation object { \"str\": ... }."),
        SchemaField::new("description", ValueKind::LocalizedText)
            .help("Description shown in the UI. Plain text and snippets are both fine."),
        SchemaField::new("points", ValueKind::Integer)
            .bounds(-100.0, 100.0)
            .help("Point cost at character creation. Positive spends points, negative grants them."),
        SchemaField::new("visibility", ValueKind::Integer)
            .bounds(0.0, 10.0)
            .help("How visible the trait is to NPCs (0 = invisible, higher = easier to notice)."),
        SchemaField::new("ugliness", ValueKind::Integer)
            .bounds(-10.0, 10.0)
            .help("NPC-reaction ugliness. Negative makes the character more attractive."),
        SchemaField::new("starting_trait", ValueKind::Boolean)
            .help("Whether the trait can be picked at character creation."),
        SchemaField::new("valid", ValueKind::Boolean)
            .help("Whether the mutation is obtainable through normal play (mutagens etc.)."),
        SchemaField::new("purifiable", ValueKind::Boolean)
            .help("Whether purifier/primer can remove the mutation."),
        SchemaField::new("player_display", ValueKind::Boolean)
            .help("Whether the mutation shows up on the character screen."),
        SchemaField::new("vanity", ValueKind::Boolean)
            .help("Cosmetic mutation, freely changeable (hair color, eye color and such)."),
        SchemaField::new("types", ValueKind::StringList)
            .help("Internal mutation type groups; mutations sharing a type are exclusive."),
        SchemaField::new("category", ValueKind::StringList)
            .help("Mutation categories (bird, insect, ...), used by primers and thresholds."),
        SchemaField::new("allowed_category", ValueKind::StringList)
            .help("Categories a character with this mutation may still mutate toward."),
        SchemaField::new("prereqs", ValueKind::ReferenceList)
            .reference("mutation")
            .help("Prerequisite mutations; any one of the list satisfies the requirement."),
        SchemaField::new("prereqs2", ValueKind::ReferenceList)
            .reference("mutation")
            .help("Second prerequisite group. Condition: (one of prereqs) AND (one of prereqs2)."),
        SchemaField::new("threshreq", ValueKind::ReferenceList)
            .reference("mutation")
            .help("Required threshold mutations, without which this one is unreachable."),
        SchemaField::new("cancels", ValueKind::ReferenceList)
            .reference("mutation")
            .help("Mutations removed when this one is gained."),
        SchemaField::new("changes_to", ValueKind::ReferenceList)
            .reference("mutation")
            .help("What this mutation can evolve into under further mutagenesis."),
        SchemaField::new("leads_to", ValueKind::ReferenceList)
            .reference("mutation")
            .help("Mutations that can evolve out of this one (inverse of changes_to)."),
        SchemaField::new("flags", ValueKind::FlagList)
            .help("Mutation flags (NIGHTVISION, STR_UP, ...), one per line."),
        SchemaField::new("variants", ValueKind::RawStructured)
            .help("Cosmetic variants of the mutation. Nested structure, edited as raw JSON."),
    ]
}

fn effect_fields() -> Vec<SchemaField> {
    vec![
        SchemaField::new("id", ValueKind::Text).required().help(
            "Unique id of the effect (type: \"effect_type\"). Referenced from spells, \
             mutations, items and so on.",
        ),
        SchemaField::new("name", ValueKind::LocalizedText)
            .help("Effect name, if it is ever shown to the player."),
        SchemaField::new("desc", ValueKind::LocalizedText)
            .help("Effect description. Often unused directly but useful as documentation."),
        SchemaField::new("max_intensity", ValueKind::Integer)
            .bounds(1.0, 1000.0)
            .help("Maximum stack intensity of the effect."),
        SchemaField::new("duration", ValueKind::Integer)
            .bounds(0.0, 1_000_000.0)
            .help("Base duration in turns (or hundredths of a turn, depending on context)."),
        SchemaField::new("max_duration", ValueKind::Integer)
            .bounds(0.0, 1_000_000.0)
            .help("Maximum duration of the effect."),
        SchemaField::new("permanent", ValueKind::Boolean)
            .help("If true, the effect never decays on its own."),
        SchemaField::new("resist_traits", ValueKind::StringList)
            .help("Traits/mutations that weaken or cancel the effect."),
        SchemaField::new("resist_effects", ValueKind::StringList)
            .help("Ids of other effects granting resistance to this one."),
        SchemaField::new("flags", ValueKind::FlagList)
            .help("Effect flags: INTERNAL, PERMANENT, PAIN, BAD, GOOD and so on."),
        SchemaField::new("extra", ValueKind::RawStructured)
            .label("extra (raw JSON)")
            .help("Other effect_type fields the editor has no dedicated editor for \
                   (base_mods, scaling_mods, eocs, ...)."),
    ]
}

fn eoc_fields() -> Vec<SchemaField> {
    vec![
        SchemaField::new("id", ValueKind::Text)
            .required()
            .help("Effect-on-condition id (type: \"effect_on_condition\")."),
        SchemaField::new("EOC_TYPE", ValueKind::Enumerated)
            .choices(&[
                "ACTIVATION",
                "RECURRING",
                "AVATAR_DEATH",
                "NPC_DEATH",
                "PREVENT_DEATH",
                "EVENT",
            ])
            .help("When the EOC is considered for running."),
        SchemaField::new("recurrence", ValueKind::RawStructured)
            .help("How often a RECURRING EOC fires (seconds or a variable_object)."),
        SchemaField::new("required_event", ValueKind::RawStructured)
            .help("The cata_event an EVENT EOC listens for."),
        SchemaField::new("condition", ValueKind::RawStructured)
            .help("Dialogue-style condition (u_has_trait, npc_has_effect, ...)."),
        SchemaField::new("deactivate_condition", ValueKind::RawStructured)
            .help("Condition that deactivates a recurring EOC."),
        SchemaField::new("effect", ValueKind::RawStructured)
            .help("Dialogue-style effects run when the condition is true."),
        SchemaField::new("false_effect", ValueKind::RawStructured)
            .help("Effects run when the condition is false."),
        SchemaField::new("global", ValueKind::Boolean)
            .help("Whether the EOC is global and also iterated over every NPC."),
        SchemaField::new("run_for_npcs", ValueKind::Boolean)
            .help("Run for NPCs as well; only meaningful when global is true."),
    ]
}

const ITEM_COLORS: [&str; 8] = [
    "black", "red", "green", "brown", "blue", "magenta", "cyan", "white",
];

fn item_fields() -> Vec<SchemaField> {
    vec![
        SchemaField::new("id", ValueKind::Text)
            .required()
            .help("Item id, unique within its own type (GENERIC, ARMOR, TOOL, ...)."),
        SchemaField::new("copy-from", ValueKind::Text)
            .help("Id of another item this one inherits defaults from."),
        SchemaField::new("abstract", ValueKind::Text).help(
            "Template definition that never spawns in game. Other items may copy-from it.",
        ),
        SchemaField::new("name", ValueKind::LocalizedText)
            .help("Item name; usually a translation object { \"str\": ... }."),
        SchemaField::new("description", ValueKind::LocalizedText).help("Item description."),
        SchemaField::new("weight", ValueKind::Text)
            .help("Weight, in grams or as a string with units; see JSON_INFO."),
        SchemaField::new("volume", ValueKind::Text)
            .help("Volume, in milliliters or as a string with units."),
        SchemaField::new("price", ValueKind::Integer)
            .bounds(0.0, 1_000_000_000.0)
            .help("Pre-cataclysm price in cent-USD; 100 is one dollar."),
        SchemaField::new("price_postapoc", ValueKind::Integer)
            .bounds(0.0, 1_000_000_000.0)
            .help("Post-cataclysm price, used by traders."),
        SchemaField::new("material", ValueKind::StringList)
            .help("Item materials (steel, cotton, plastic, ...)."),
        SchemaField::new("category", ValueKind::Text)
            .help("Item category (ammo, armor, food, ...); affects menus and sorting."),
        SchemaField::new("symbol", ValueKind::Text)
            .help("Map symbol in the terminal build."),
        SchemaField::new("color", ValueKind::Enumerated)
            .choices(&ITEM_COLORS)
            .help("Symbol color. Light variants (light_red, ...) can be typed in directly."),
        SchemaField::new("looks_like", ValueKind::Text)
            .help("Id of another item whose sprite is used when this one has none."),
        SchemaField::new("flags", ValueKind::FlagList)
            .help("Item flags (STURDY, WATERPROOF, TRADER_AVOID, ...), one per line."),
        SchemaField::new("pocket_data", ValueKind::RawStructured)
            .help("Pocket definitions for containers and rigs. Complex; edit as raw JSON."),
        SchemaField::new("extra", ValueKind::RawStructured)
            .label("extra (raw JSON)")
            .help("Any other item fields without a dedicated editor \
                   (charges, use_action, qualities, ...)."),
    ]
}

fn spell_fields() -> Vec<SchemaField> {
    vec![
        SchemaField::new("id", ValueKind::Text).required().help(
            "Spell id (type: \"SPELL\"). Referenced from spell lists, mutations, professions.",
        ),
        SchemaField::new("name", ValueKind::LocalizedText).help("Spell name shown in the UI."),
        SchemaField::new("description", ValueKind::LocalizedText).help("Spell description."),
        SchemaField::new("effect", ValueKind::Text)
            .help("Effect archetype (attack, targeted, teleport, summon, pain, area_attack, ...)."),
        SchemaField::new("effect_str", ValueKind::Text)
            .help("Extra effect parameter (a monster, field or effect id, depending on effect)."),
        SchemaField::new("spell_class", ValueKind::Text)
            .help("Spell class, used for grouping, perks and balance."),
        SchemaField::new("valid_targets", ValueKind::StringList)
            .help("Allowed target kinds: self, ally, hostile, ground and so on."),
        SchemaField::new("min_range", ValueKind::Integer)
            .bounds(0.0, 120.0)
            .help("Casting range at level 0."),
        SchemaField::new("max_range", ValueKind::Integer)
            .bounds(0.0, 120.0)
            .help("Casting range at maximum level."),
        SchemaField::new("min_damage", ValueKind::Integer)
            .help("Damage/effect strength at level 0."),
        SchemaField::new("max_damage", ValueKind::Integer)
            .help("Damage/effect strength at maximum level."),
        SchemaField::new("damage_type", ValueKind::Enumerated)
            .choices(&["bash", "cut", "stab", "heat", "cold", "electric", "acid", "biological"])
            .help("Damage type dealt by the spell."),
        SchemaField::new("base_energy_cost", ValueKind::Integer)
            .bounds(0.0, 100_000.0)
            .help("Resource cost (mana, stamina, movement) at level 0."),
        SchemaField::new("energy_source", ValueKind::Enumerated)
            .choices(&["mana", "stamina", "bionic", "hp", "fatigue", "none"])
            .help("Which resource pays for the cast."),
        SchemaField::new("difficulty", ValueKind::Integer)
            .bounds(0.0, 50.0)
            .help("How hard the spell is to learn and level."),
        SchemaField::new("max_level", ValueKind::Integer)
            .bounds(0.0, 60.0)
            .help("Maximum spell level."),
        SchemaField::new("flags", ValueKind::FlagList)
            .help("Spell flags (PERMANENT, NO_PROJECTILE, VERBAL, ...), one per line."),
        SchemaField::new("extra_effects", ValueKind::RawStructured)
            .help("Additional spells triggered by the cast."),
        SchemaField::new("raw", ValueKind::RawStructured)
            .label("extra (raw JSON)")
            .help("Other SPELL fields without a dedicated editor \
                   (field_id, sound_id, learn_spells, ...)."),
    ]
}

fn talk_topic_fields() -> Vec<SchemaField> {
    vec![
        SchemaField::new("id", ValueKind::Text).required().help(
            "Dialogue topic id (type: \"talk_topic\"). Referenced from NPCs, missions and \
             other talk_topics.",
        ),
        SchemaField::new("dynamic_line", ValueKind::RawStructured)
            .help("NPC line, or a dynamic structure per TALK_JSON (u_has_trait, npc_male, ...)."),
        SchemaField::new("responses", ValueKind::RawStructured)
            .help("Player response list: objects with text, topic, trial, effect, ..."),
        SchemaField::new("speaker_effect", ValueKind::RawStructured)
            .help("effect_on_condition run when the NPC speaks the dynamic_line."),
        SchemaField::new("repeat_responses", ValueKind::RawStructured)
            .help("Separate responses for repeated visits to this topic."),
    ]
}

fn mission_fields() -> Vec<SchemaField> {
    vec![
        SchemaField::new("id", ValueKind::Text)
            .required()
            .help("Mission id (type: \"mission_definition\")."),
        SchemaField::new("name", ValueKind::LocalizedText).help("Mission name shown in the UI."),
        SchemaField::new("goal", ValueKind::Text)
            .help("Mission goal (MISSION_GOAL_... from MISSIONS_JSON)."),
        SchemaField::new("difficulty", ValueKind::Integer)
            .bounds(0.0, 10.0)
            .help("Mission difficulty, for the UI and balance."),
        SchemaField::new("value", ValueKind::Integer)
            .bounds(0.0, 1_000_000_000.0)
            .help("Reward value of the mission."),
        SchemaField::new("origins", ValueKind::StringList)
            .help("Where the mission comes from (ORIGIN_OPENER_NPC and so on)."),
        SchemaField::new("dialogue", ValueKind::RawStructured)
            .help("Dialogue lines per mission stage."),
        SchemaField::new("place", ValueKind::RawStructured)
            .help("Target placement rules (om_terrain, om_terrain_match, ...)."),
        SchemaField::new("followup", ValueKind::Text)
            .help("Id of the next mission in the chain."),
        SchemaField::new("deadline_low", ValueKind::Integer)
            .help("Earliest deadline, in minutes of game time."),
        SchemaField::new("deadline_high", ValueKind::Integer)
            .help("Latest deadline."),
        SchemaField::new("extra", ValueKind::RawStructured)
            .label("extra (raw JSON)")
            .help("Other mission fields (monster_kill, item, effects_on_condition, ...)."),
    ]
}

fn npc_class_fields() -> Vec<SchemaField> {
    vec![
        SchemaField::new("id", ValueKind::Text).required().help(
            "NPC class id (type: \"npc_class\"). Referenced by concrete NPCs and worldgen.",
        ),
        SchemaField::new("name", ValueKind::LocalizedText)
            .help("Class name, used in debug output and occasionally in the UI."),
        SchemaField::new("job_description", ValueKind::LocalizedText)
            .help("Description of the NPC's occupation."),
        SchemaField::new("traits", ValueKind::ReferenceList)
            .reference("mutation")
            .help("Traits/mutations granted to NPCs of this class."),
        SchemaField::new("skills", ValueKind::RawStructured)
            .help("NPC skills (skill -> level map)."),
        SchemaField::new("spells", ValueKind::ReferenceList)
            .reference("magic_spell")
            .help("Spell ids NPCs of this class know."),
        SchemaField::new("worn_override", ValueKind::RawStructured)
            .help("Clothing guaranteed to be worn by the NPC."),
        SchemaField::new("carry_override", ValueKind::RawStructured)
            .help("Inventory items overriding standard generation."),
    ]
}

fn npc_fields() -> Vec<SchemaField> {
    vec![
        SchemaField::new("id", ValueKind::Text)
            .required()
            .help("Concrete NPC id (type: \"npc\"). Used by missions and spawn points."),
        SchemaField::new("name", ValueKind::LocalizedText).help("Displayed NPC name."),
        SchemaField::new("class", ValueKind::ReferenceList)
            .reference("npc_class")
            .help("npc_class id for this NPC. Usually a single entry."),
        SchemaField::new("attitude", ValueKind::Enumerated)
            .choices(&["null", "hostile", "follower", "lead", "defend", "kill", "flee"])
            .help("Base attitude toward the player."),
        SchemaField::new("mission", ValueKind::Text)
            .help("Mission type or mission_role (see MISSIONS_JSON)."),
        SchemaField::new("chat", ValueKind::ReferenceList)
            .reference("talk_topic")
            .help("Initial dialogue topic id. Usually a single entry."),
        SchemaField::new("faction", ValueKind::Text)
            .help("NPC faction id (see FACTIONS.md)."),
        SchemaField::new("traits", ValueKind::ReferenceList)
            .reference("mutation")
            .help("Extra traits/mutations of this particular NPC."),
        SchemaField::new("skills", ValueKind::RawStructured)
            .help("Exact skill levels of this NPC."),
        SchemaField::new("inventory", ValueKind::RawStructured)
            .help("Definition of what the NPC wears and carries."),
        SchemaField::new("raw", ValueKind::RawStructured)
            .label("extra (raw JSON)")
            .help("Any other NPC fields (opinion, personality, eoc, ...)."),
    ]
}

fn monster_fields() -> Vec<SchemaField> {
    vec![
        SchemaField::new("id", ValueKind::Text)
            .required()
            .help("Monster id (type: \"MONSTER\"). Conventionally mon_XXX."),
        SchemaField::new("name", ValueKind::LocalizedText)
            .help("Monster name; may carry a plural form and context."),
        SchemaField::new("description", ValueKind::LocalizedText).help("Monster description."),
        SchemaField::new("hp", ValueKind::Integer)
            .bounds(1.0, 100_000.0)
            .help("Hit points."),
        SchemaField::new("speed", ValueKind::Integer)
            .bounds(0.0, 1_000.0)
            .help("Movement speed; 100 is human."),
        SchemaField::new("volume", ValueKind::Text)
            .help("Body volume as a string with units (\"35 L\", \"1500 ml\")."),
        SchemaField::new("weight", ValueKind::Text)
            .help("Body weight as a string with units (\"75 kg\", \"7500 g\")."),
        SchemaField::new("symbol", ValueKind::Text)
            .help("Map symbol in the terminal build."),
        SchemaField::new("color", ValueKind::Enumerated)
            .choices(&ITEM_COLORS)
            .help("Symbol color. Light variants (light_red, ...) can be typed in directly."),
        SchemaField::new("default_faction", ValueKind::Text).help("Monster faction id."),
        SchemaField::new("bodytype", ValueKind::Text)
            .help("Body plan (human, dog, bird, insect, ...)."),
        SchemaField::new("categories", ValueKind::StringList)
            .help("Spawn categories (NULL, CLASSIC, WILDLIFE, ...)."),
        SchemaField::new("species", ValueKind::StringList)
            .help("Species (HUMAN, ZOMBIE, ROBOT, ...)."),
        SchemaField::new("material", ValueKind::StringList)
            .help("Body materials (flesh, steel, ...)."),
        SchemaField::new("aggression", ValueKind::Integer)
            .bounds(-100.0, 100.0)
            .help("Base aggression."),
        SchemaField::new("morale", ValueKind::Integer)
            .bounds(-100.0, 100.0)
            .help("Base morale; a monster with low morale flees."),
        SchemaField::new("melee_skill", ValueKind::Integer)
            .bounds(0.0, 10.0)
            .help("Melee skill of the monster."),
        SchemaField::new("dodge", ValueKind::Integer)
            .bounds(0.0, 10.0)
            .help("Dodge skill of the monster."),
        SchemaField::new("melee_damage", ValueKind::RawStructured)
            .help("List of melee damage instances."),
        SchemaField::new("armor", ValueKind::RawStructured)
            .help("Armor per damage type."),
        SchemaField::new("flags", ValueKind::FlagList)
            .help("Monster flags (SEES, HEARS, GRABS, NO_BREATHE, ...), one per line."),
        SchemaField::new("death_drops", ValueKind::RawStructured)
            .help("Loot dropped on death (item_groups)."),
        SchemaField::new("death_function", ValueKind::StringList)
            .help("Special on-death functions (NORMAL, EXPLODE, ...)."),
        SchemaField::new("special_attacks", ValueKind::RawStructured)
            .help("Special attacks (MONSTER_ATTACK). Complex; edit as raw JSON."),
        SchemaField::new("upgrades", ValueKind::RawStructured)
            .help("Monster evolution over time."),
        SchemaField::new("reproduction", ValueKind::RawStructured)
            .help("Reproduction parameters."),
        SchemaField::new("extra", ValueKind::RawStructured)
            .label("extra (raw JSON)")
            .help("Any other monster fields from MONSTERS.md."),
    ]
}

fn monstergroup_fields() -> Vec<SchemaField> {
    vec![
        SchemaField::new("name", ValueKind::Text)
            .required()
            .help("Monster group id (type: \"monstergroup\"). Note: the id lives in `name`."),
        SchemaField::new("default", ValueKind::Text)
            .help("Default monster of this group."),
        SchemaField::new("monsters", ValueKind::RawStructured)
            .help("Monster list (monster, freq, cost_multiplier, pack_size, ...)."),
        SchemaField::new("replace_monster", ValueKind::RawStructured)
            .help("Monster replacement rules."),
        SchemaField::new("extra", ValueKind::RawStructured)
            .label("extra (raw JSON)")
            .help("Other monstergroup fields."),
    ]
}

fn profession_fields() -> Vec<SchemaField> {
    vec![
        SchemaField::new("ident", ValueKind::Text)
            .required()
            .help("Profession id (legacy 0.G format). Used by scenarios and character creation."),
        SchemaField::new("name", ValueKind::LocalizedText)
            .help("Profession name for the character creation screen."),
        SchemaField::new("description", ValueKind::LocalizedText)
            .help("Backstory and kit description of the profession."),
        SchemaField::new("points", ValueKind::Integer)
            .bounds(-100.0, 100.0)
            .help("Point cost of the profession."),
        SchemaField::new("skills", ValueKind::RawStructured)
            .help("Starting skills of the profession."),
        SchemaField::new("traits", ValueKind::ReferenceList)
            .reference("mutation")
            .help("Starting traits/mutations of the profession."),
        SchemaField::new("items", ValueKind::RawStructured)
            .help("Starting equipment (worn clothing, inventory)."),
        SchemaField::new("CBMs", ValueKind::StringList)
            .help("Ids of pre-installed bionics, if any."),
    ]
}

fn scenario_fields() -> Vec<SchemaField> {
    vec![
        SchemaField::new("ident", ValueKind::Text)
            .required()
            .help("Scenario id (type: \"scenario\"). Mentioned by saves and mods."),
        SchemaField::new("name", ValueKind::LocalizedText)
            .help("Scenario name in the character creation menu."),
        SchemaField::new("description", ValueKind::LocalizedText)
            .help("Description of the scenario's starting situation."),
        SchemaField::new("points", ValueKind::Integer)
            .bounds(-100.0, 100.0)
            .help("Point modifier applied when the scenario is picked."),
        SchemaField::new("allowed_locs", ValueKind::StringList)
            .help("Allowed starting locations (shelter, evacuee, lmoe, ...)."),
        SchemaField::new("professions", ValueKind::ReferenceList)
            .reference("profession")
            .help("Professions available in this scenario, by ident."),
        SchemaField::new("flags", ValueKind::FlagList)
            .help("Scenario flags (LONE_START, SUR_START, ...), one per line."),
        SchemaField::new("extra", ValueKind::RawStructured)
            .label("extra (raw JSON)")
            .help("Other scenario fields (hobbies, traits, forced_traits, ...)."),
    ]
}

/// The full built-in table in presentation order.
pub fn builtin_schemas() -> Vec<Schema> {
    vec![
        Schema::new(
            "mutation",
            "Mutations (mutation)",
            "mutation",
            "id",
            "id",
            mutation_fields(),
        ),
        Schema::new(
            "effect_type",
            "Effects (effect_type)",
            "effect_type",
            "id",
            "id",
            effect_fields(),
        ),
        Schema::new(
            "effect_on_condition",
            "Effects on condition (effect_on_condition)",
            "effect_on_condition",
            "id",
            "id",
            eoc_fields(),
        ),
        Schema::new(
            "item_generic",
            "Items: GENERIC",
            "GENERIC",
            "id",
            "name",
            item_fields(),
        ),
        Schema::new(
            "item_armor",
            "Items: ARMOR",
            "ARMOR",
            "id",
            "name",
            item_fields(),
        ),
        Schema::new(
            "item_tool",
            "Items: TOOL",
            "TOOL",
            "id",
            "name",
            item_fields(),
        ),
        Schema::new(
            "item_comestible",
            "Items: COMESTIBLE",
            "COMESTIBLE",
            "id",
            "name",
            item_fields(),
        ),
        Schema::new(
            "item_gun",
            "Items: GUN",
            "GUN",
            "id",
            "name",
            item_fields(),
        ),
        Schema::new(
            "magic_spell",
            "Magic: spells (SPELL)",
            "SPELL",
            "id",
            "name",
            spell_fields(),
        ),
        Schema::new(
            "talk_topic",
            "Dialogue (talk_topic)",
            "talk_topic",
            "id",
            "id",
            talk_topic_fields(),
        ),
        Schema::new(
            "mission_definition",
            "Missions (mission_definition)",
            "mission_definition",
            "id",
            "name",
            mission_fields(),
        ),
        Schema::new(
            "npc_class",
            "NPC classes (npc_class)",
            "npc_class",
            "id",
            "id",
            npc_class_fields(),
        ),
        Schema::new("npc", "NPCs (npc)", "npc", "id", "name", npc_fields()),
        Schema::new(
            "monster",
            "Monsters (MONSTER)",
            "MONSTER",
            "id",
            "name",
            monster_fields(),
        ),
        Schema::new(
            "monstergroup",
            "Monster groups (monstergroup)",
            "monstergroup",
            "name",
            "name",
            monstergroup_fields(),
        ),
        Schema::new(
            "profession",
            "Professions (profession)",
            "profession",
            "ident",
            "name",
            profession_fields(),
        ),
        Schema::new(
            "scenario",
            "Scenarios (scenario)",
            "scenario",
            "ident",
            "name",
            scenario_fields(),
        ),
    ]
}
