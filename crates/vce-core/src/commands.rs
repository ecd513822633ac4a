//! The fixed catalog of in-game command names.
//!
//! This list is the game's own enumeration of bindable commands (ship, SRV,
//! multicrew, camera, on-foot), in the order the controls menu presents them.
//! It does not validate the binds file; a file may contain commands that are
//! not listed here and still produce actions.  The catalog only exists so a
//! failed lookup can say "this command exists but has no keyboard or mouse
//! binding" instead of "unknown action".

/// Every bindable command name, in controls-menu order.
pub const COMMANDS: &[&str] = &[
    "MouseReset",
    "BlockMouseDecay",
    "YawLeftButton",
    "YawRightButton",
    "YawToRollButton",
    "RollLeftButton",
    "RollRightButton",
    "PitchUpButton",
    "PitchDownButton",
    "LeftThrustButton",
    "RightThrustButton",
    "UpThrustButton",
    "DownThrustButton",
    "ForwardThrustButton",
    "BackwardThrustButton",
    "UseAlternateFlightValuesToggle",
    "ToggleReverseThrottleInput",
    "ForwardKey",
    "BackwardKey",
    "SetSpeedMinus100",
    "SetSpeedMinus75",
    "SetSpeedMinus50",
    "SetSpeedMinus25",
    "SetSpeedZero",
    "SetSpeed25",
    "SetSpeed50",
    "SetSpeed75",
    "SetSpeed100",
    "YawLeftButton_Landing",
    "YawRightButton_Landing",
    "PitchUpButton_Landing",
    "PitchDownButton_Landing",
    "RollLeftButton_Landing",
    "RollRightButton_Landing",
    "LeftThrustButton_Landing",
    "RightThrustButton_Landing",
    "UpThrustButton_Landing",
    "DownThrustButton_Landing",
    "ForwardThrustButton_Landing",
    "BackwardThrustButton_Landing",
    "ToggleFlightAssist",
    "UseBoostJuice",
    "HyperSuperCombination",
    "Supercruise",
    "Hyperspace",
    "DisableRotationCorrectToggle",
    "OrbitLinesToggle",
    "SelectTarget",
    "CycleNextTarget",
    "CyclePreviousTarget",
    "SelectHighestThreat",
    "CycleNextHostileTarget",
    "CyclePreviousHostileTarget",
    "TargetWingman0",
    "TargetWingman1",
    "TargetWingman2",
    "SelectTargetsTarget",
    "WingNavLock",
    "CycleNextSubsystem",
    "CyclePreviousSubsystem",
    "TargetNextRouteSystem",
    "PrimaryFire",
    "SecondaryFire",
    "CycleFireGroupNext",
    "CycleFireGroupPrevious",
    "DeployHardpointToggle",
    "ToggleButtonUpInput",
    "DeployHeatSink",
    "ShipSpotLightToggle",
    "RadarIncreaseRange",
    "RadarDecreaseRange",
    "IncreaseEnginesPower",
    "IncreaseWeaponsPower",
    "IncreaseSystemsPower",
    "ResetPowerDistribution",
    "HMDReset",
    "ToggleCargoScoop",
    "EjectAllCargo",
    "LandingGearToggle",
    "MicrophoneMute",
    "UseShieldCell",
    "FireChaffLauncher",
    "TriggerFieldNeutraliser",
    "ChargeECM",
    "WeaponColourToggle",
    "EngineColourToggle",
    "NightVisionToggle",
    "UIFocus",
    "FocusLeftPanel",
    "FocusCommsPanel",
    "QuickCommsPanel",
    "FocusRadarPanel",
    "FocusRightPanel",
    "GalaxyMapOpen",
    "SystemMapOpen",
    "ShowPGScoreSummaryInput",
    "HeadLookToggle",
    "Pause",
    "FriendsMenu",
    "OpenCodexGoToDiscovery",
    "PlayerHUDModeToggle",
    "ExplorationFSSEnter",
    "UI_Up",
    "UI_Down",
    "UI_Left",
    "UI_Right",
    "UI_Select",
    "UI_Back",
    "UI_Toggle",
    "CycleNextPanel",
    "CyclePreviousPanel",
    "CycleNextPage",
    "CyclePreviousPage",
    "HeadLookReset",
    "HeadLookPitchUp",
    "HeadLookPitchDown",
    "HeadLookYawLeft",
    "HeadLookYawRight",
    "CamPitchUp",
    "CamPitchDown",
    "CamYawLeft",
    "CamYawRight",
    "CamTranslateForward",
    "CamTranslateBackward",
    "CamTranslateLeft",
    "CamTranslateRight",
    "CamTranslateUp",
    "CamTranslateDown",
    "CamZoomIn",
    "CamZoomOut",
    "CamTranslateZHold",
    "GalaxyMapHome",
    "ToggleDriveAssist",
    "SteerLeftButton",
    "SteerRightButton",
    "BuggyRollLeftButton",
    "BuggyRollRightButton",
    "BuggyPitchUpButton",
    "BuggyPitchDownButton",
    "VerticalThrustersButton",
    "BuggyPrimaryFireButton",
    "BuggySecondaryFireButton",
    "AutoBreakBuggyButton",
    "HeadlightsBuggyButton",
    "ToggleBuggyTurretButton",
    "BuggyCycleFireGroupNext",
    "BuggyCycleFireGroupPrevious",
    "SelectTarget_Buggy",
    "BuggyTurretYawLeftButton",
    "BuggyTurretYawRightButton",
    "BuggyTurretPitchUpButton",
    "BuggyTurretPitchDownButton",
    "BuggyToggleReverseThrottleInput",
    "IncreaseSpeedButtonMax",
    "DecreaseSpeedButtonMax",
    "IncreaseEnginesPower_Buggy",
    "IncreaseWeaponsPower_Buggy",
    "IncreaseSystemsPower_Buggy",
    "ResetPowerDistribution_Buggy",
    "ToggleCargoScoop_Buggy",
    "EjectAllCargo_Buggy",
    "RecallDismissShip",
    "UIFocus_Buggy",
    "FocusLeftPanel_Buggy",
    "FocusCommsPanel_Buggy",
    "QuickCommsPanel_Buggy",
    "FocusRadarPanel_Buggy",
    "FocusRightPanel_Buggy",
    "GalaxyMapOpen_Buggy",
    "SystemMapOpen_Buggy",
    "OpenCodexGoToDiscovery_Buggy",
    "PlayerHUDModeToggle_Buggy",
    "HeadLookToggle_Buggy",
    "MultiCrewToggleMode",
    "MultiCrewPrimaryFire",
    "MultiCrewSecondaryFire",
    "MultiCrewPrimaryUtilityFire",
    "MultiCrewSecondaryUtilityFire",
    "MultiCrewThirdPersonYawLeftButton",
    "MultiCrewThirdPersonYawRightButton",
    "MultiCrewThirdPersonPitchUpButton",
    "MultiCrewThirdPersonPitchDownButton",
    "MultiCrewThirdPersonFovOutButton",
    "MultiCrewThirdPersonFovInButton",
    "MultiCrewCockpitUICycleForward",
    "MultiCrewCockpitUICycleBackward",
    "OrderRequestDock",
    "OrderDefensiveBehaviour",
    "OrderAggressiveBehaviour",
    "OrderFocusTarget",
    "OrderHoldFire",
    "OrderHoldPosition",
    "OrderFollow",
    "OpenOrders",
    "PhotoCameraToggle",
    "PhotoCameraToggle_Buggy",
    "PhotoCameraToggle_Humanoid",
    "VanityCameraScrollLeft",
    "VanityCameraScrollRight",
    "ToggleFreeCam",
    "VanityCameraOne",
    "VanityCameraTwo",
    "VanityCameraThree",
    "VanityCameraFour",
    "VanityCameraFive",
    "VanityCameraSix",
    "VanityCameraSeven",
    "VanityCameraEight",
    "VanityCameraNine",
    "VanityCameraTen",
    "FreeCamToggleHUD",
    "FreeCamSpeedInc",
    "FreeCamSpeedDec",
    "ToggleReverseThrottleInputFreeCam",
    "MoveFreeCamForward",
    "MoveFreeCamBackwards",
    "MoveFreeCamRight",
    "MoveFreeCamLeft",
    "MoveFreeCamUp",
    "MoveFreeCamDown",
    "PitchCameraUp",
    "PitchCameraDown",
    "YawCameraLeft",
    "YawCameraRight",
    "RollCameraLeft",
    "RollCameraRight",
    "ToggleRotationLock",
    "FixCameraRelativeToggle",
    "FixCameraWorldToggle",
    "QuitCamera",
    "ToggleAdvanceMode",
    "FreeCamZoomIn",
    "FreeCamZoomOut",
    "FStopDec",
    "FStopInc",
    "CommanderCreator_Undo",
    "CommanderCreator_Redo",
    "CommanderCreator_Rotation_MouseToggle",
    "GalnetAudio_Play_Pause",
    "GalnetAudio_SkipForward",
    "GalnetAudio_SkipBackward",
    "GalnetAudio_ClearQueue",
    "ExplorationFSSCameraPitchIncreaseButton",
    "ExplorationFSSCameraPitchDecreaseButton",
    "ExplorationFSSCameraYawIncreaseButton",
    "ExplorationFSSCameraYawDecreaseButton",
    "ExplorationFSSZoomIn",
    "ExplorationFSSZoomOut",
    "ExplorationFSSMiniZoomIn",
    "ExplorationFSSMiniZoomOut",
    "ExplorationFSSRadioTuningX_Increase",
    "ExplorationFSSRadioTuningX_Decrease",
    "ExplorationFSSDiscoveryScan",
    "ExplorationFSSQuit",
    "ExplorationFSSTarget",
    "ExplorationFSSShowHelp",
    "ExplorationSAAChangeScannedAreaViewToggle",
    "ExplorationSAAExitThirdPerson",
    "ExplorationSAANextGenus",
    "ExplorationSAAPreviousGenus",
    "SAAThirdPersonYawLeftButton",
    "SAAThirdPersonYawRightButton",
    "SAAThirdPersonPitchUpButton",
    "SAAThirdPersonPitchDownButton",
    "SAAThirdPersonFovOutButton",
    "SAAThirdPersonFovInButton",
    "HumanoidForwardButton",
    "HumanoidBackwardButton",
    "HumanoidStrafeLeftButton",
    "HumanoidStrafeRightButton",
    "HumanoidRotateLeftButton",
    "HumanoidRotateRightButton",
    "HumanoidPitchUpButton",
    "HumanoidPitchDownButton",
    "HumanoidSprintButton",
    "HumanoidWalkButton",
    "HumanoidCrouchButton",
    "HumanoidJumpButton",
    "HumanoidPrimaryInteractButton",
    "HumanoidSecondaryInteractButton",
    "HumanoidItemWheelButton",
    "HumanoidEmoteWheelButton",
    "HumanoidUtilityWheelCycleMode",
    "HumanoidItemWheelButton_XLeft",
    "HumanoidItemWheelButton_XRight",
    "HumanoidItemWheelButton_YUp",
    "HumanoidItemWheelButton_YDown",
    "HumanoidPrimaryFireButton",
    "HumanoidZoomButton",
    "HumanoidThrowGrenadeButton",
    "HumanoidMeleeButton",
    "HumanoidReloadButton",
    "HumanoidSwitchWeapon",
    "HumanoidSelectPrimaryWeaponButton",
    "HumanoidSelectSecondaryWeaponButton",
    "HumanoidSelectUtilityWeaponButton",
    "HumanoidSelectNextWeaponButton",
    "HumanoidSelectPreviousWeaponButton",
    "HumanoidHideWeaponButton",
    "HumanoidSelectNextGrenadeTypeButton",
    "HumanoidSelectPreviousGrenadeTypeButton",
    "HumanoidToggleFlashlightButton",
    "HumanoidToggleNightVisionButton",
    "HumanoidToggleShieldsButton",
    "HumanoidClearAuthorityLevel",
    "HumanoidHealthPack",
    "HumanoidBattery",
    "HumanoidSelectFragGrenade",
    "HumanoidSelectEMPGrenade",
    "HumanoidSelectShieldGrenade",
    "HumanoidSwitchToRechargeTool",
    "HumanoidSwitchToCompAnalyser",
    "HumanoidSwitchToSuitTool",
    "HumanoidToggleToolModeButton",
    "HumanoidToggleMissionHelpPanelButton",
    "HumanoidPing",
    "GalaxyMapOpen_Humanoid",
    "SystemMapOpen_Humanoid",
    "FocusCommsPanel_Humanoid",
    "QuickCommsPanel_Humanoid",
    "HumanoidOpenAccessPanelButton",
    "HumanoidConflictContextualUIButton",
    "StoreEnableRotation",
    "StoreCamZoomIn",
    "StoreCamZoomOut",
    "StoreToggle",
    "HumanoidEmoteSlot1",
    "HumanoidEmoteSlot2",
    "HumanoidEmoteSlot3",
    "HumanoidEmoteSlot4",
    "HumanoidEmoteSlot5",
    "HumanoidEmoteSlot6",
    "HumanoidEmoteSlot7",
    "HumanoidEmoteSlot8",
];

/// Returns `true` when `name` is a command the game defines.
pub fn is_known_command(name: &str) -> bool {
    COMMANDS.contains(&name)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
